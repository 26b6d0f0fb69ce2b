//! Git repository initialization

use std::path::Path;
use std::sync::Arc;

use bootstrap_fs::{DirStatus, ensure_dir};

use crate::{CommandRunner, Result};

/// Command used to initialize a repository
pub const GIT_INIT: &str = "git init";

/// Turns a directory into a git repository, creating it first if needed.
#[derive(Clone)]
pub struct GitInitializer {
    runner: Arc<dyn CommandRunner>,
}

impl GitInitializer {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Ensure `path` exists, then run `git init` inside it.
    ///
    /// An already existing directory is fine; only a failed creation or a
    /// failed `git init` is an error. Returns whether the directory was
    /// created by this call.
    pub async fn initialize(&self, path: &Path) -> Result<DirStatus> {
        let status = ensure_dir(path).await?;
        self.runner.run(path, GIT_INIT).await?;

        tracing::info!(
            path = %path.display(),
            created_dir = status.was_created(),
            "Initialized git repository"
        );
        Ok(status)
    }
}

impl std::fmt::Debug for GitInitializer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitInitializer").finish_non_exhaustive()
    }
}
