//! Target path composition

use std::path::{Component, Path, PathBuf};

/// Join a base directory and an optional child directory name.
///
/// With no child name (or an empty one) the base directory itself is the
/// target. No normalization is performed beyond [`Path::join`].
pub fn project_path(base: impl AsRef<Path>, child: Option<&str>) -> PathBuf {
    match child {
        Some(name) if !name.is_empty() => base.as_ref().join(name),
        _ => base.as_ref().to_path_buf(),
    }
}

/// Whether `name` stays beneath any base it is joined to.
///
/// Only plain names and `.` are allowed. A root, a drive prefix or `..`
/// would let [`Path::join`] leave the base directory.
pub fn is_contained_child(name: &str) -> bool {
    let mut has_name = false;
    for component in Path::new(name).components() {
        match component {
            Component::Normal(_) => has_name = true,
            Component::CurDir => {}
            Component::RootDir | Component::Prefix(_) | Component::ParentDir => return false,
        }
    }
    has_name
}
