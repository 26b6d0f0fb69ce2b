//! Bootstrap orchestration
//!
//! `bootstrap_project` runs two stages strictly in order:
//!
//! 1. **git** - ensure `base/name` exists and run `git init` in it
//! 2. **remote** - create the GitHub repository `name`
//!
//! Progress is forward-only. A failed remote stage leaves the local
//! repository in place and says so, so the caller can retry the remote
//! step alone or clean up by hand.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use bootstrap_fs::project_path;
use bootstrap_git::GitInitializer;
use bootstrap_github::{RepositoryClient, RepositoryOptions, RepositoryRecord};
use serde_json::json;

use crate::handlers::repository_summary;
use crate::{ToolResult, format_error_chain};

/// Stage a bootstrap stopped at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Git,
    Remote,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Git => "git",
            Self::Remote => "remote",
        }
    }
}

/// What a bootstrap run did
#[derive(Debug)]
pub enum BootstrapReport {
    /// Local initialization failed; the remote was never contacted
    GitFailed {
        path: PathBuf,
        error: bootstrap_git::Error,
    },
    /// The local repository exists but the remote could not be created
    RemoteFailed {
        path: PathBuf,
        error: bootstrap_github::Error,
    },
    /// Both stages succeeded
    Completed {
        project: String,
        path: PathBuf,
        repository: RepositoryRecord,
    },
}

impl BootstrapReport {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    /// The stage that failed, if any
    pub fn failed_stage(&self) -> Option<Stage> {
        match self {
            Self::GitFailed { .. } => Some(Stage::Git),
            Self::RemoteFailed { .. } => Some(Stage::Remote),
            Self::Completed { .. } => None,
        }
    }

    pub fn local_path(&self) -> &Path {
        match self {
            Self::GitFailed { path, .. }
            | Self::RemoteFailed { path, .. }
            | Self::Completed { path, .. } => path,
        }
    }

    pub fn into_tool_result(self) -> ToolResult {
        match self {
            Self::GitFailed { path, error } => ToolResult::failure(format!(
                "Error initializing git repo at {}: {}",
                path.display(),
                format_error_chain(&error)
            )),
            Self::RemoteFailed { path, error } => ToolResult::failure(format!(
                "Initialized git repo at {} but failed to create remote repository: {}",
                path.display(),
                format_error_chain(&error)
            )),
            Self::Completed {
                project,
                path,
                repository,
            } => ToolResult::ok_with_data(
                format!(
                    "Successfully bootstrapped project '{}': local git repo at {} and GitHub repo created",
                    project,
                    path.display()
                ),
                json!({
                    "localPath": path.display().to_string(),
                    "githubRepo": repository_summary(&repository),
                }),
            ),
        }
    }
}

/// Runs the two bootstrap stages against injected collaborators
#[derive(Clone)]
pub struct Bootstrapper {
    git: GitInitializer,
    client: Arc<dyn RepositoryClient>,
}

impl Bootstrapper {
    pub fn new(git: GitInitializer, client: Arc<dyn RepositoryClient>) -> Self {
        Self { git, client }
    }

    /// Bootstrap `base/<options.name>` locally, then on GitHub.
    pub async fn run(&self, base: &Path, options: &RepositoryOptions) -> BootstrapReport {
        let project = options.name();
        let path = project_path(base, Some(project));

        tracing::info!(stage = Stage::Git.as_str(), path = %path.display(), "Bootstrap stage started");
        if let Err(error) = self.git.initialize(&path).await {
            tracing::warn!(
                stage = Stage::Git.as_str(),
                path = %path.display(),
                error = %format_error_chain(&error),
                "Bootstrap stage failed"
            );
            return BootstrapReport::GitFailed { path, error };
        }

        tracing::info!(stage = Stage::Remote.as_str(), project, "Bootstrap stage started");
        match self.client.create_repository(options).await {
            Ok(repository) => {
                tracing::info!(project, path = %path.display(), "Bootstrap completed");
                BootstrapReport::Completed {
                    project: project.to_string(),
                    path,
                    repository,
                }
            }
            Err(error) => {
                tracing::warn!(
                    stage = Stage::Remote.as_str(),
                    path = %path.display(),
                    error = %format_error_chain(&error),
                    "Bootstrap stage failed; local repository left in place"
                );
                BootstrapReport::RemoteFailed { path, error }
            }
        }
    }
}

impl std::fmt::Debug for Bootstrapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bootstrapper").finish_non_exhaustive()
    }
}
