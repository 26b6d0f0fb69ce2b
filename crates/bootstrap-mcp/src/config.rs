//! Server configuration
//!
//! Settings are layered, later sources winning:
//! 1. Built-in defaults
//! 2. Config file (`<config_dir>/project-bootstrapper/config.toml`)
//! 3. Environment and command line flags (merged by clap)
//!
//! A missing default config file is not an error. A config file named
//! explicitly on the command line must exist.

use std::path::{Path, PathBuf};

use bootstrap_github::{ClientOptions, DEFAULT_API_URL};
use serde::Deserialize;

use crate::{Error, Result};

/// Directory name under the platform config dir
pub const APP_DIR: &str = "project-bootstrapper";

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn,bootstrap_mcp=info";

/// Contents of `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub api_url: Option<String>,
    pub user_agent: Option<String>,
    pub token_file: Option<PathBuf>,
}

impl FileConfig {
    /// Parse the config file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse `path` if it is a file, otherwise return defaults.
    pub fn load_optional(path: &Path) -> Result<Self> {
        if path.is_file() {
            tracing::debug!(path = %path.display(), "Loading config file");
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "No config file found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Platform config directory for this application
///
/// - Linux: `~/.config/project-bootstrapper/`
/// - macOS: `~/Library/Application Support/project-bootstrapper/`
/// - Windows: `%APPDATA%\project-bootstrapper\`
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR))
}

/// Load `.env` from the working directory or its ancestors.
pub fn load_dotenv() -> std::result::Result<Option<PathBuf>, dotenvy::Error> {
    env_file_outcome(dotenvy::dotenv())
}

/// A missing env file is `Ok(None)`; an unreadable or malformed one is an error.
fn env_file_outcome(
    result: dotenvy::Result<PathBuf>,
) -> std::result::Result<Option<PathBuf>, dotenvy::Error> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub api_url: Option<String>,
    pub token_file: Option<PathBuf>,
}

/// Fully resolved settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_url: String,
    pub user_agent: String,
    /// Fallback token location when `GITHUB_TOKEN` is unset
    pub token_file: Option<PathBuf>,
}

impl Settings {
    /// Load the config file and merge it with `overrides`.
    pub fn load(overrides: Overrides) -> Result<Self> {
        let config_dir = default_config_dir();
        let file = match (&overrides.config, &config_dir) {
            (Some(path), _) => FileConfig::load(path)?,
            (None, Some(dir)) => FileConfig::load_optional(&dir.join("config.toml"))?,
            (None, None) => FileConfig::default(),
        };
        Ok(Self::resolve(overrides, file, config_dir.as_deref()))
    }

    /// Merge already loaded sources. `config_dir` supplies the default token file.
    pub fn resolve(overrides: Overrides, file: FileConfig, config_dir: Option<&Path>) -> Self {
        let defaults = ClientOptions::default();

        Self {
            api_url: overrides
                .api_url
                .or(file.api_url)
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            user_agent: file.user_agent.unwrap_or(defaults.user_agent),
            token_file: overrides
                .token_file
                .or(file.token_file)
                .or_else(|| config_dir.map(|d| d.join("token"))),
        }
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            api_url: self.api_url.clone(),
            user_agent: self.user_agent.clone(),
        }
    }
}
