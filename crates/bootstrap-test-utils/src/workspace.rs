//! Temporary base directories for tool calls.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory used as the `baseDirectory` of tool calls.
///
/// Removed from disk when dropped.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Root of the workspace.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Root of the workspace as a string, for JSON arguments.
    pub fn base(&self) -> String {
        self.path().to_string_lossy().into_owned()
    }

    /// `root/<name>`
    pub fn child(&self, name: &str) -> PathBuf {
        self.path().join(name)
    }

    /// Create a regular file at `root/<name>`, blocking directory creation
    /// beneath it.
    pub fn block_with_file(&self, name: &str) -> PathBuf {
        let path = self.child(name);
        std::fs::write(&path, "not a directory").unwrap();
        path
    }
}
