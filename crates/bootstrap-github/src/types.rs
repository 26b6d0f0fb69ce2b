//! Repository request and response types

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Parameters for creating a repository for the authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryOptions {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    private: bool,
    auto_init: bool,
}

impl RepositoryOptions {
    /// Public repository with an initial commit.
    ///
    /// Rejects an empty or whitespace-only name.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::InvalidName);
        }
        Ok(Self {
            name,
            description: None,
            private: false,
            auto_init: true,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }

    pub fn with_auto_init(mut self, auto_init: bool) -> Self {
        self.auto_init = auto_init;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_private(&self) -> bool {
        self.private
    }

    pub fn auto_init(&self) -> bool {
        self.auto_init
    }
}

/// A repository as reported by GitHub.
///
/// Only the fields the bootstrapper reads are kept; everything else in the
/// API response is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub clone_url: String,
    #[serde(default)]
    pub private: bool,
}
