//! Error types for bootstrap-github

use std::path::PathBuf;

pub use reqwest::StatusCode;

/// Result type for bootstrap-github operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bootstrap-github operations
///
/// Remote failures are always wrapped with the operation that failed;
/// the cause is available through [`std::error::Error::source`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Repository name must not be empty")]
    InvalidName,

    #[error("Failed to create repository")]
    CreateRepository {
        #[source]
        source: RemoteError,
    },

    #[error("Failed to list repositories")]
    ListRepositories {
        #[source]
        source: RemoteError,
    },

    #[error("Failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("GitHub token contains characters that are not valid in an HTTP header")]
    InvalidToken,

    #[error("No GitHub token found: set {var} or provide a token file")]
    MissingToken { var: &'static str },

    #[error("Failed to read token file {path}")]
    TokenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a single API request failed
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error(transparent)]
    Transport(reqwest::Error),

    #[error("GitHub API returned {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("Failed to decode GitHub API response")]
    Decode(#[source] reqwest::Error),
}
