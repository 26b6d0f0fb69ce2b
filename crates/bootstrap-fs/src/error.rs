//! Error types for bootstrap-fs

use std::path::PathBuf;

/// Result type for bootstrap-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bootstrap-fs operations
///
/// Messages carry only the failing path; the underlying I/O error is
/// reachable through [`std::error::Error::source`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to create directory at {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// The path the failed operation targeted.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::CreateDir { path, .. } => path,
        }
    }
}
