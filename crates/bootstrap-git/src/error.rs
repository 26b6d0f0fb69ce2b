//! Error types for bootstrap-git

use std::path::PathBuf;

/// Result type for bootstrap-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bootstrap-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fs(#[from] bootstrap_fs::Error),

    #[error("Failed to start `{command}` in {dir}")]
    Spawn {
        command: String,
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Command `{command}` failed ({}){}", exit_status(.code), stderr_suffix(.stderr))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn exit_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}
