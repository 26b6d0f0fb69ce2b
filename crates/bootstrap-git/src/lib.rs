//! Git layer for the project bootstrapper
//!
//! - [`runner`] executes shell commands in a working directory
//! - [`init`] turns a (possibly missing) directory into a git repository

pub mod error;
pub mod init;
pub mod runner;

pub use error::{Error, Result};
pub use init::GitInitializer;
pub use runner::{CommandOutcome, CommandRunner, ShellRunner};
