//! Shell command execution
//!
//! One command per call, awaited to completion. There is no timeout: a
//! command that never exits stalls the caller.

use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;

use crate::{Error, Result};

/// Captured output of a successful command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutcome {
    pub stdout: String,
    pub stderr: String,
}

/// Runs a command string in a working directory.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `command` in `working_dir`.
    ///
    /// Fails if the command cannot be started or exits unsuccessfully.
    async fn run(&self, working_dir: &Path, command: &str) -> Result<CommandOutcome>;
}

/// [`CommandRunner`] backed by the system shell.
///
/// - Unix: `sh -c "{command}"`
/// - Windows: `cmd /C "{command}"`
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl ShellRunner {
    pub fn new() -> Self {
        Self
    }
}

fn shell_command(command: &str) -> Command {
    #[cfg(windows)]
    {
        let mut c = Command::new("cmd");
        c.args(["/C", command]);
        c
    }
    #[cfg(not(windows))]
    {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command);
        c
    }
}

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, working_dir: &Path, command: &str) -> Result<CommandOutcome> {
        tracing::debug!(command, dir = %working_dir.display(), "Running command");

        let output = shell_command(command)
            .current_dir(working_dir)
            .output()
            .await
            .map_err(|source| Error::Spawn {
                command: command.to_string(),
                dir: working_dir.to_path_buf(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(Error::CommandFailed {
                command: command.to_string(),
                code: output.status.code(),
                stderr,
            });
        }

        // Some tools (git among them) report progress on stderr
        if !stderr.trim().is_empty() {
            tracing::warn!(command, stderr = %stderr.trim(), "Command wrote to stderr");
        }

        Ok(CommandOutcome { stdout, stderr })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn captures_stdout() {
        let temp = TempDir::new().unwrap();
        let outcome = ShellRunner::new().run(temp.path(), "echo hello").await.unwrap();
        assert_eq!(outcome.stdout.trim(), "hello");
        assert!(outcome.stderr.is_empty());
    }

    #[tokio::test]
    async fn runs_in_working_directory() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("marker.txt"), "").unwrap();

        let outcome = ShellRunner::new().run(temp.path(), "ls").await.unwrap();

        assert!(outcome.stdout.contains("marker.txt"));
    }

    #[tokio::test]
    async fn stderr_on_success_is_not_a_failure() {
        let temp = TempDir::new().unwrap();
        let outcome = ShellRunner::new()
            .run(temp.path(), "echo warning >&2")
            .await
            .unwrap();
        assert_eq!(outcome.stderr.trim(), "warning");
    }

    #[tokio::test]
    async fn nonzero_exit_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = ShellRunner::new()
            .run(temp.path(), "echo broken >&2; exit 3")
            .await
            .unwrap_err();

        match err {
            Error::CommandFailed { code, stderr, .. } => {
                assert_eq!(code, Some(3));
                assert_eq!(stderr.trim(), "broken");
            }
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_working_directory_fails_to_spawn() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");

        let err = ShellRunner::new().run(&missing, "echo hi").await.unwrap_err();

        assert!(matches!(err, Error::Spawn { .. }));
    }
}
