//! Project Bootstrapper MCP Server
//!
//! A Model Context Protocol server that lets an agent create local project
//! directories, initialize git repositories and create matching GitHub
//! repositories.
//!
//! # Usage
//!
//! ```bash
//! bootstrap-mcp [--config <path>] [--api-url <url>] [--token-file <path>]
//! ```
//!
//! # Environment Variables
//!
//! - `GITHUB_TOKEN`: GitHub token (required, may come from a `.env` file)
//! - `GITHUB_API_URL`: API base URL (default: `https://api.github.com`)
//! - `RUST_LOG`: Control log verbosity (default: `warn,bootstrap_mcp=info`)
//!
//! # Protocol
//!
//! The server communicates via JSON-RPC 2.0 over stdio:
//! - Requests/responses go through stdout
//! - Logs go to stderr (to avoid interfering with the protocol)

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use bootstrap_git::ShellRunner;
use bootstrap_github::{GithubClient, Token};
use bootstrap_mcp::config::{DEFAULT_LOG_FILTER, Overrides, Settings, load_dotenv};
use bootstrap_mcp::{Dispatcher, McpServer, format_error_chain};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// MCP server for bootstrapping projects
#[derive(Parser)]
#[command(name = "bootstrap-mcp")]
#[command(about = "MCP server that bootstraps local git projects and their GitHub repositories")]
#[command(version)]
struct Args {
    /// Config file (default: <config_dir>/project-bootstrapper/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL")]
    api_url: Option<String>,

    /// File holding a GitHub token, read when GITHUB_TOKEN is unset
    #[arg(long)]
    token_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout is reserved for MCP protocol
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    match load_dotenv() {
        Ok(Some(path)) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Ok(None) => {}
        Err(e) => tracing::warn!(error = %e, "Ignoring unreadable .env file"),
    }
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format_error_chain(&e), "bootstrap-mcp exited with an error");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> bootstrap_mcp::Result<()> {
    let settings = Settings::load(Overrides {
        config: args.config,
        api_url: args.api_url,
        token_file: args.token_file,
    })?;

    let token = Token::resolve(settings.token_file.as_deref())?;
    let client = GithubClient::new(&token, settings.client_options())?;

    tracing::info!(api_url = %settings.api_url, "Starting bootstrap-mcp server");

    let dispatcher = Dispatcher::new(Arc::new(client), Arc::new(ShellRunner::new()));
    McpServer::new(dispatcher).run().await
}
