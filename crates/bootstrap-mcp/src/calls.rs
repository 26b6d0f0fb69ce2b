//! Typed tool invocations
//!
//! Raw `tools/call` arguments are parsed into a [`ToolCall`] before any
//! handler runs. Anything that does not fit the tool's schema is rejected
//! here with [`ToolError::InvalidArguments`].

use std::path::PathBuf;

use bootstrap_fs::is_contained_child;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::ToolError;
use crate::tools::{
    BOOTSTRAP_PROJECT, CREATE_GITHUB_REPO, CREATE_LOCAL_DIRECTORY, INITIALIZE_GIT_REPOSITORY,
    LIST_GITHUB_REPOS,
};

/// Arguments for `create_github_repo`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateRepoArgs {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub private: Option<bool>,
}

/// Arguments for `create_local_directory`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalDirectoryArgs {
    pub base_directory: PathBuf,
    pub project_name: String,
}

/// Arguments for `initialize_git_repository`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitInitArgs {
    pub base_directory: PathBuf,
    #[serde(default)]
    pub new_directory_name: Option<String>,
}

/// Arguments for `bootstrap_project`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BootstrapArgs {
    pub base_directory: PathBuf,
    pub project_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub private: Option<bool>,
}

/// A validated tool invocation
#[derive(Debug, Clone, PartialEq)]
pub enum ToolCall {
    CreateGithubRepo(CreateRepoArgs),
    ListGithubRepos,
    CreateLocalDirectory(LocalDirectoryArgs),
    InitializeGitRepository(GitInitArgs),
    BootstrapProject(BootstrapArgs),
}

impl ToolCall {
    /// Resolve a tool name and its raw arguments.
    ///
    /// Missing (`null`) arguments are treated as an empty object.
    pub fn parse(name: &str, arguments: Value) -> Result<Self, ToolError> {
        let arguments = match arguments {
            Value::Null => Value::Object(Default::default()),
            other => other,
        };

        let call = match name {
            CREATE_GITHUB_REPO => {
                let args: CreateRepoArgs = parse_args(CREATE_GITHUB_REPO, arguments)?;
                require_non_empty(CREATE_GITHUB_REPO, "name", &args.name)?;
                Self::CreateGithubRepo(args)
            }
            LIST_GITHUB_REPOS => Self::ListGithubRepos,
            CREATE_LOCAL_DIRECTORY => {
                let args: LocalDirectoryArgs = parse_args(CREATE_LOCAL_DIRECTORY, arguments)?;
                require_non_empty(CREATE_LOCAL_DIRECTORY, "projectName", &args.project_name)?;
                require_contained(CREATE_LOCAL_DIRECTORY, "projectName", &args.project_name)?;
                Self::CreateLocalDirectory(args)
            }
            INITIALIZE_GIT_REPOSITORY => {
                let args: GitInitArgs = parse_args(INITIALIZE_GIT_REPOSITORY, arguments)?;
                if let Some(child) = args.new_directory_name.as_deref()
                    && !child.is_empty()
                {
                    require_contained(INITIALIZE_GIT_REPOSITORY, "newDirectoryName", child)?;
                }
                Self::InitializeGitRepository(args)
            }
            BOOTSTRAP_PROJECT => {
                let args: BootstrapArgs = parse_args(BOOTSTRAP_PROJECT, arguments)?;
                require_non_empty(BOOTSTRAP_PROJECT, "projectName", &args.project_name)?;
                require_contained(BOOTSTRAP_PROJECT, "projectName", &args.project_name)?;
                Self::BootstrapProject(args)
            }
            _ => return Err(ToolError::UnknownTool(name.to_string())),
        };

        Ok(call)
    }

    /// The catalog name of this call's tool
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateGithubRepo(_) => CREATE_GITHUB_REPO,
            Self::ListGithubRepos => LIST_GITHUB_REPOS,
            Self::CreateLocalDirectory(_) => CREATE_LOCAL_DIRECTORY,
            Self::InitializeGitRepository(_) => INITIALIZE_GIT_REPOSITORY,
            Self::BootstrapProject(_) => BOOTSTRAP_PROJECT,
        }
    }
}

fn parse_args<T: DeserializeOwned>(tool: &'static str, arguments: Value) -> Result<T, ToolError> {
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid(tool, e.to_string()))
}

fn require_non_empty(tool: &'static str, field: &str, value: &str) -> Result<(), ToolError> {
    if value.trim().is_empty() {
        return Err(ToolError::invalid(tool, format!("`{}` must not be empty", field)));
    }
    Ok(())
}

/// Child names are joined onto `baseDirectory` and must stay beneath it.
fn require_contained(tool: &'static str, field: &str, value: &str) -> Result<(), ToolError> {
    if !is_contained_child(value) {
        return Err(ToolError::invalid(
            tool,
            format!("`{}` must be a relative name inside baseDirectory, got {:?}", field, value),
        ));
    }
    Ok(())
}
