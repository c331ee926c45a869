//! Filesystem adapter for `RepositoryFilesystem`.
//!
//! `FilesystemStore` owns the project root and refuses to touch any path
//! that lands outside of it once `.` and `..` are folded away.

mod repository_filesystem;

use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;

/// Filesystem-backed store rooted at the project directory.
#[derive(Debug, Clone)]
pub struct FilesystemStore {
    root: PathBuf,
}

impl FilesystemStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Reject `path` unless it stays under the project root.
    ///
    /// Purely lexical: the target and its parents need not exist yet, and
    /// the root itself may be relative.
    pub(crate) fn ensure_within_root(&self, path: &Path) -> Result<(), AppError> {
        let escapes = path.has_root()
            || path.is_absolute()
            || matches!(lexical_clean(path).components().next(), Some(Component::ParentDir));
        if escapes {
            return Err(AppError::PathTraversal(path.display().to_string()));
        }
        Ok(())
    }
}

/// Fold `.` and `..` components without consulting the filesystem.
///
/// Leading `..` of a relative path are kept; at the top of an absolute path
/// they are dropped.
pub(crate) fn lexical_clean(path: &Path) -> PathBuf {
    path.components().fold(PathBuf::new(), |mut cleaned, component| {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => cleaned.push(".."),
            },
            other => cleaned.push(other.as_os_str()),
        }
        cleaned
    })
}
