//! GitHub access for the project bootstrapper
//!
//! The rest of the workspace talks to GitHub only through the
//! [`RepositoryClient`] trait, so the orchestration layer can be exercised
//! against a fake. [`GithubClient`] is the REST implementation.

pub mod client;
pub mod credentials;
pub mod error;
pub mod types;

pub use client::{ClientOptions, DEFAULT_API_URL, GithubClient, RepositoryClient};
pub use credentials::{TOKEN_ENV_VAR, Token};
pub use error::{Error, RemoteError, Result, StatusCode};
pub use types::{RepositoryOptions, RepositoryRecord};
