//! Filesystem layer for the project bootstrapper
//!
//! Provides a single idempotent "ensure this directory exists" primitive
//! and the path composition used by every tool that targets a local
//! project directory.

pub mod dir;
pub mod error;
pub mod path;

pub use dir::{DirStatus, ensure_dir};
pub use error::{Error, Result};
pub use path::{is_contained_child, project_path};
