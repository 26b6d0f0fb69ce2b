//! Error types for the MCP server

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for MCP server operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running the server
#[derive(Debug, Error)]
pub enum Error {
    /// Error during JSON serialization/deserialization
    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    /// IO error on the transport
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// Config file could not be read
    #[error("Failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for the expected schema
    #[error("Failed to parse config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// GitHub client setup failed (missing token, bad header value)
    #[error(transparent)]
    Github(#[from] bootstrap_github::Error),
}

/// Errors raised before a tool handler runs
#[derive(Debug, Error)]
pub enum ToolError {
    /// Unknown tool requested
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Arguments did not match the tool's schema
    #[error("Invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: &'static str, reason: String },
}

impl ToolError {
    pub fn invalid(tool: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArguments {
            tool,
            reason: reason.into(),
        }
    }
}

/// Render an error and its chain of causes as one line.
///
/// Each cause is appended after `": "`. A cause whose text is identical to
/// the link before it is skipped, so wrappers that display their source
/// verbatim are not repeated.
pub fn format_error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut previous = err.to_string();
    let mut message = previous.clone();
    let mut source = err.source();

    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && text != previous {
            message.push_str(": ");
            message.push_str(&text);
        }
        previous = text;
        source = cause.source();
    }

    message
}
