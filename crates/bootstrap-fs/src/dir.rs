//! Idempotent directory creation

use std::path::Path;

use crate::{Error, Result};

/// Outcome of [`ensure_dir`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    /// The directory (and any missing ancestors) was created
    Created,
    /// Something already existed at the path; nothing was touched
    AlreadyExisted,
}

impl DirStatus {
    pub fn was_created(self) -> bool {
        self == Self::Created
    }
}

/// Make sure `path` exists, creating it and all missing ancestors if not.
///
/// Existence is checked exactly once. An existing entry is reported as
/// [`DirStatus::AlreadyExisted`] and left alone, even if it is not a
/// directory; callers that need a directory find out on their next step.
/// An existence check that cannot decide (for example a file where an ancestor
/// directory should be) falls through to creation, which reports the error.
pub async fn ensure_dir(path: &Path) -> Result<DirStatus> {
    let exists = match tokio::fs::try_exists(path).await {
        Ok(exists) => exists,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Could not check whether path exists");
            false
        }
    };

    if exists {
        tracing::debug!(path = %path.display(), "Directory already exists");
        return Ok(DirStatus::AlreadyExisted);
    }

    tokio::fs::create_dir_all(path)
        .await
        .map_err(|source| Error::CreateDir {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(path = %path.display(), "Created directory");
    Ok(DirStatus::Created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("demo");

        let status = ensure_dir(&target).await.unwrap();

        assert_eq!(status, DirStatus::Created);
        assert!(target.is_dir());
    }

    #[tokio::test]
    async fn creates_missing_ancestors() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("a/b/c");

        let status = ensure_dir(&target).await.unwrap();

        assert!(status.was_created());
        assert!(target.is_dir());
    }

    #[tokio::test]
    async fn existing_directory_is_left_untouched() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("demo");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep.txt"), "contents").unwrap();

        let status = ensure_dir(&target).await.unwrap();

        assert_eq!(status, DirStatus::AlreadyExisted);
        assert_eq!(fs::read_to_string(target.join("keep.txt")).unwrap(), "contents");
    }

    #[tokio::test]
    async fn fails_when_ancestor_is_a_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let target = blocker.join("demo");

        let err = ensure_dir(&target).await.unwrap_err();

        assert!(matches!(err, Error::CreateDir { .. }));
        assert!(err.to_string().starts_with("Failed to create directory at "));
        assert_eq!(err.path(), &target);
        assert!(!target.exists());
    }
}
