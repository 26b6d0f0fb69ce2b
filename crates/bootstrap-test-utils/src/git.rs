//! Git repository assertions.

use std::path::Path;

/// Returns true if `path` opens as a git repository.
pub fn is_git_repo(path: &Path) -> bool {
    git2::Repository::open(path).is_ok()
}

/// Asserts that `path` is the root of a git repository.
///
/// # Panics
/// Panics if the repository cannot be opened or its workdir is elsewhere.
pub fn assert_git_repo(path: &Path) {
    let repo = git2::Repository::open(path).unwrap_or_else(|e| {
        panic!("assert_git_repo: {} is not a git repository: {e}", path.display())
    });
    let workdir = repo
        .workdir()
        .unwrap_or_else(|| panic!("assert_git_repo: {} is a bare repository", path.display()));
    assert_eq!(
        workdir.canonicalize().unwrap(),
        path.canonicalize().unwrap(),
        "assert_git_repo: repository root differs from {}",
        path.display()
    );
}
