//! MCP server for bootstrapping projects
//!
//! Exposes five tools to an agent over the Model Context Protocol:
//! creating and listing GitHub repositories, creating local directories,
//! initializing git repositories, and `bootstrap_project`, which chains a
//! local `git init` with remote repository creation.
//!
//! # Architecture
//!
//! ```text
//! [ MCP Client (agent) ]
//!        | (JSON-RPC over stdio)
//!        v
//! [ McpServer ] --> [ Dispatcher ] --> [ Bootstrapper ]
//!                        |                   |
//!                        +---------+---------+
//!                                  |
//!        +-------------------------+------------------------+
//!        v                         v                        v
//! [ bootstrap-fs ]          [ bootstrap-git ]        [ bootstrap-github ]
//!  ensure_dir                GitInitializer           RepositoryClient
//! ```
//!
//! Every tool call produces a [`ToolResult`]; failures are reported in the
//! result rather than as protocol errors.

pub mod bootstrap;
pub mod calls;
pub mod config;
pub mod error;
pub mod handlers;
pub mod protocol;
pub mod result;
pub mod server;
pub mod tools;

pub use bootstrap::{BootstrapReport, Bootstrapper};
pub use calls::ToolCall;
pub use config::Settings;
pub use error::{Error, Result, ToolError, format_error_chain};
pub use handlers::Dispatcher;
pub use result::ToolResult;
pub use server::McpServer;
pub use tools::{ToolDefinition, get_tool_definitions};
