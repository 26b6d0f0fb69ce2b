//! Command runners for exercising failure paths.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bootstrap_git::{CommandOutcome, CommandRunner, Error, Result};

/// A [`CommandRunner`] whose every command exits with status 128.
///
/// Counts invocations so tests can assert a command was (or was not) run.
#[derive(Debug)]
pub struct FailingRunner {
    stderr: String,
    calls: AtomicUsize,
}

impl FailingRunner {
    pub fn new(stderr: impl Into<String>) -> Self {
        Self {
            stderr: stderr.into(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of commands attempted so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CommandRunner for FailingRunner {
    async fn run(&self, _working_dir: &Path, command: &str) -> Result<CommandOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(Error::CommandFailed {
            command: command.to_string(),
            code: Some(128),
            stderr: self.stderr.clone(),
        })
    }
}
