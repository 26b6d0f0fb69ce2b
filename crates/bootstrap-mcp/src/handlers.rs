//! MCP tool handlers
//!
//! [`Dispatcher`] turns a tool name and raw arguments into a [`ToolResult`].
//! Argument validation happens once, in [`ToolCall::parse`]; each handler
//! below receives typed arguments and reports failures in the result.

use std::path::Path;
use std::sync::Arc;

use bootstrap_fs::{DirStatus, ensure_dir, project_path};
use bootstrap_git::{CommandRunner, GitInitializer};
use bootstrap_github::{RepositoryClient, RepositoryOptions, RepositoryRecord};
use serde_json::{Value, json};

use crate::calls::{BootstrapArgs, CreateRepoArgs, GitInitArgs, LocalDirectoryArgs};
use crate::{Bootstrapper, ToolCall, ToolResult, format_error_chain};

/// Routes tool calls to their handlers.
///
/// Collaborators are injected, so tests can swap the GitHub client and
/// the command runner for fakes.
#[derive(Clone)]
pub struct Dispatcher {
    client: Arc<dyn RepositoryClient>,
    git: GitInitializer,
}

impl Dispatcher {
    pub fn new(client: Arc<dyn RepositoryClient>, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            client,
            git: GitInitializer::new(runner),
        }
    }

    /// Handle a tool call by name. Never fails; errors become failed results.
    pub async fn dispatch(&self, name: &str, arguments: Value) -> ToolResult {
        tracing::debug!(tool = name, "Dispatching tool call");

        match ToolCall::parse(name, arguments) {
            Ok(call) => self.execute(call).await,
            Err(e) => {
                tracing::debug!(tool = name, error = %e, "Rejected tool call");
                ToolResult::failure(format_error_chain(&e))
            }
        }
    }

    /// Run an already validated call
    pub async fn execute(&self, call: ToolCall) -> ToolResult {
        let tool = call.name();
        let result = match call {
            ToolCall::CreateGithubRepo(args) => self.create_github_repo(args).await,
            ToolCall::ListGithubRepos => self.list_github_repos().await,
            ToolCall::CreateLocalDirectory(args) => create_local_directory(args).await,
            ToolCall::InitializeGitRepository(args) => self.initialize_git_repository(args).await,
            ToolCall::BootstrapProject(args) => self.bootstrap_project(args).await,
        };
        tracing::debug!(tool, success = result.success(), "Tool call finished");
        result
    }

    async fn create_github_repo(&self, args: CreateRepoArgs) -> ToolResult {
        let mut options = match RepositoryOptions::new(&args.name) {
            Ok(options) => options.with_private(args.private.unwrap_or(false)),
            Err(e) => return ToolResult::failure(format_error_chain(&e)),
        };
        if let Some(description) = args.description {
            options = options.with_description(description);
        }

        match self.client.create_repository(&options).await {
            Ok(repo) => ToolResult::ok_with_data(
                format!("Successfully created repository: {}", repo.name),
                repository_summary(&repo),
            ),
            Err(e) => ToolResult::failure(format_error_chain(&e)),
        }
    }

    async fn list_github_repos(&self) -> ToolResult {
        match self.client.list_repositories().await {
            Ok(repos) => {
                let entries: Vec<Value> = repos
                    .iter()
                    .map(|r| {
                        json!({
                            "name": r.name,
                            "url": r.html_url,
                            "private": r.private,
                        })
                    })
                    .collect();
                ToolResult::ok_with_data(
                    format!("Found {} repositories", repos.len()),
                    Value::Array(entries),
                )
            }
            Err(e) => ToolResult::failure(format_error_chain(&e)),
        }
    }

    async fn initialize_git_repository(&self, args: GitInitArgs) -> ToolResult {
        let path = project_path(&args.base_directory, args.new_directory_name.as_deref());
        self.initialize_git(&path).await
    }

    /// Initialize a git repository at `path`, creating the directory if needed.
    pub async fn initialize_git(&self, path: &Path) -> ToolResult {
        match self.git.initialize(path).await {
            Ok(_) => ToolResult::ok(format!(
                "Git repo initialized successfully at {}",
                path.display()
            )),
            Err(e) => ToolResult::failure(format_error_chain(&e)),
        }
    }

    async fn bootstrap_project(&self, args: BootstrapArgs) -> ToolResult {
        let options = match RepositoryOptions::new(&args.project_name) {
            Ok(options) => options
                .with_description(args.description.unwrap_or_default())
                .with_private(args.private.unwrap_or(false)),
            Err(e) => return ToolResult::failure(format_error_chain(&e)),
        };

        Bootstrapper::new(self.git.clone(), self.client.clone())
            .run(&args.base_directory, &options)
            .await
            .into_tool_result()
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}

async fn create_local_directory(args: LocalDirectoryArgs) -> ToolResult {
    let path = project_path(&args.base_directory, Some(&args.project_name));
    create_directory(&path).await
}

/// Create `path` and any missing ancestors.
///
/// An existing path is reported as a failure and left untouched.
pub async fn create_directory(path: &Path) -> ToolResult {
    match ensure_dir(path).await {
        Ok(DirStatus::Created) => ToolResult::ok(format!("Created directory at {}", path.display())),
        Ok(DirStatus::AlreadyExisted) => {
            ToolResult::failure(format!("Directory already exists at {}!", path.display()))
        }
        Err(e) => ToolResult::failure(format_error_chain(&e)),
    }
}

/// `{name, url, clone_url}` as reported for a created repository
pub(crate) fn repository_summary(repo: &RepositoryRecord) -> Value {
    json!({
        "name": repo.name,
        "url": repo.html_url,
        "clone_url": repo.clone_url,
    })
}
