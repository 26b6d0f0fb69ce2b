//! MCP Server implementation
//!
//! Reads one JSON-RPC message per line, handles it to completion and writes
//! the response before reading the next line.

use serde_json::{Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::protocol::{
    CallToolResult, InitializeResult, JsonRpcRequest, JsonRpcResponse, PROTOCOL_VERSION,
    ServerCapabilities, ServerInfo, ToolCallParams, ToolsCapability, codes,
};
use crate::tools::{ToolDefinition, get_tool_definitions};
use crate::{Dispatcher, Error, Result, format_error_chain};

/// MCP server exposing the bootstrap tools
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use bootstrap_git::ShellRunner;
/// use bootstrap_mcp::{Dispatcher, McpServer};
///
/// let dispatcher = Dispatcher::new(client, Arc::new(ShellRunner::new()));
/// McpServer::new(dispatcher).run().await?;
/// ```
#[derive(Debug)]
pub struct McpServer {
    dispatcher: Dispatcher,
    tools: Vec<ToolDefinition>,
}

impl McpServer {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
            tools: get_tool_definitions(),
        }
    }

    /// Serve over the process's stdin and stdout
    pub async fn run(&self) -> Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();

        tracing::info!("MCP server ready, listening on stdio");
        self.serve(stdin, stdout).await
    }

    /// Serve line-delimited JSON-RPC until `reader` reaches end of input
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            tracing::debug!(request = %line, "Received message");

            let response = match self.handle_message(line).await {
                Ok(response) => response,
                Err(e) => {
                    let error_response = internal_error(&e);
                    tracing::error!(error = %format_error_chain(&e), "Failed to handle message");
                    serde_json::to_string(&error_response)?
                }
            };

            // Notifications get no response
            if response.is_empty() {
                continue;
            }

            tracing::debug!(response = %response, "Sending message");
            writer.write_all(response.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }

        tracing::info!("Input closed, shutting down");
        Ok(())
    }

    /// Handle a single MCP message
    ///
    /// Returns the serialized response, or an empty string for notifications.
    pub async fn handle_message(&self, message: &str) -> Result<String> {
        let value: Value = match serde_json::from_str(message) {
            Ok(value) => value,
            Err(e) => {
                return respond(JsonRpcResponse::error(
                    None,
                    codes::PARSE_ERROR,
                    format!("Parse error: {}", e),
                ));
            }
        };

        let id = value.get("id").cloned().filter(|id| !id.is_null());
        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(request) => request,
            Err(e) => {
                return respond(JsonRpcResponse::error(
                    id,
                    codes::INVALID_REQUEST,
                    format!("Invalid Request: {}", e),
                ));
            }
        };

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id)?,
            "initialized" | "notifications/initialized" => return Ok(String::new()),
            method if method.starts_with("notifications/") => {
                tracing::debug!(method, "Ignoring notification");
                return Ok(String::new());
            }
            "ping" => JsonRpcResponse::success(request.id, json!({})),
            "tools/list" => self.handle_tools_list(request.id)?,
            "tools/call" => self.handle_tools_call(request.id, request.params).await?,
            _ => JsonRpcResponse::error(
                request.id,
                codes::METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            ),
        };

        respond(response)
    }

    fn handle_initialize(&self, id: Option<Value>) -> Result<JsonRpcResponse> {
        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
            server_info: ServerInfo {
                name: "bootstrap-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        Ok(JsonRpcResponse::success(id, serde_json::to_value(result)?))
    }

    fn handle_tools_list(&self, id: Option<Value>) -> Result<JsonRpcResponse> {
        Ok(JsonRpcResponse::success(
            id,
            json!({ "tools": serde_json::to_value(&self.tools)? }),
        ))
    }

    async fn handle_tools_call(&self, id: Option<Value>, params: Value) -> Result<JsonRpcResponse> {
        let params: ToolCallParams = match serde_json::from_value(params) {
            Ok(params) => params,
            Err(e) => {
                return Ok(JsonRpcResponse::error(
                    id,
                    codes::INVALID_PARAMS,
                    format!("Invalid params: {}", e),
                ));
            }
        };

        let result = self.dispatcher.dispatch(&params.name, params.arguments).await;
        if !result.success() {
            tracing::info!(tool = %params.name, reason = result.message(), "Tool call failed");
        }

        let content = CallToolResult::text(result.to_json_pretty()?, !result.success());
        Ok(JsonRpcResponse::success(id, serde_json::to_value(content)?))
    }

    /// Available tools
    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }
}

/// `-32603` reply for a message that could not be handled
fn internal_error(err: &Error) -> JsonRpcResponse {
    JsonRpcResponse::error(
        None,
        codes::INTERNAL_ERROR,
        format!("Internal error: {}", format_error_chain(err)),
    )
}

fn respond(response: JsonRpcResponse) -> Result<String> {
    serde_json::to_string(&response).map_err(Error::from)
}
