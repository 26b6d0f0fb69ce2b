//! MCP tool catalog
//!
//! # Remote Repositories
//! - `create_github_repo` - Create a repository for the authenticated user
//! - `list_github_repos` - List the authenticated user's repositories
//!
//! # Local Projects
//! - `create_local_directory` - Create `baseDirectory/projectName`
//! - `initialize_git_repository` - Run `git init`, creating the directory if needed
//!
//! # Composite
//! - `bootstrap_project` - Local git repository plus GitHub repository in one call

use serde::{Deserialize, Serialize};
use serde_json::json;

pub const CREATE_GITHUB_REPO: &str = "create_github_repo";
pub const LIST_GITHUB_REPOS: &str = "list_github_repos";
pub const CREATE_LOCAL_DIRECTORY: &str = "create_local_directory";
pub const INITIALIZE_GIT_REPOSITORY: &str = "initialize_git_repository";
pub const BOOTSTRAP_PROJECT: &str = "bootstrap_project";

/// Tool definition for MCP protocol
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
}

/// Get all available tool definitions
pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: CREATE_GITHUB_REPO.to_string(),
            description: "Create a new GitHub repository".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Repository name (required)"
                    },
                    "description": {
                        "type": "string",
                        "description": "Repository description (optional)"
                    },
                    "private": {
                        "type": "boolean",
                        "description": "Make repository private (default: false)"
                    }
                },
                "required": ["name"]
            }),
        },
        ToolDefinition {
            name: LIST_GITHUB_REPOS.to_string(),
            description: "List your GitHub repositories".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        },
        ToolDefinition {
            name: CREATE_LOCAL_DIRECTORY.to_string(),
            description: "Create a directory in the local file system".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "baseDirectory": {
                        "type": "string",
                        "description": "Absolute path of the parent directory of the new directory"
                    },
                    "projectName": {
                        "type": "string",
                        "description": "Name of the new directory to create"
                    }
                },
                "required": ["baseDirectory", "projectName"]
            }),
        },
        ToolDefinition {
            name: INITIALIZE_GIT_REPOSITORY.to_string(),
            description: "Initialize a directory with git version control, creating the directory if necessary".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "baseDirectory": {
                        "type": "string",
                        "description": "Absolute path of the directory to initialize (the parent of the git directory when newDirectoryName is given)"
                    },
                    "newDirectoryName": {
                        "type": "string",
                        "description": "Name of a child directory of baseDirectory to initialize instead"
                    }
                },
                "required": ["baseDirectory"]
            }),
        },
        ToolDefinition {
            name: BOOTSTRAP_PROJECT.to_string(),
            description: "Create a local directory, initialize it as a git repository, and create a matching repository on GitHub".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "baseDirectory": {
                        "type": "string",
                        "description": "Absolute path of the parent directory of the project"
                    },
                    "projectName": {
                        "type": "string",
                        "description": "Project name, used for both the local directory and the GitHub repository"
                    },
                    "description": {
                        "type": "string",
                        "description": "Repository description (optional)"
                    },
                    "private": {
                        "type": "boolean",
                        "description": "Make repository private (default: false)"
                    }
                },
                "required": ["baseDirectory", "projectName"]
            }),
        },
    ]
}
