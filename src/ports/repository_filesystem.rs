//! Project-level filesystem operations.

use std::path::PathBuf;

use crate::domain::AppError;

/// Port for low-level filesystem operations under the project root.
///
/// All `path` arguments are relative to the project root.
/// Implementations must reject paths that escape the root boundary.
pub trait RepositoryFilesystem {
    /// Write UTF-8 content to a file, truncating any previous content.
    ///
    /// The parent directory must already exist; a missing one is an error.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Resolve a relative path to an absolute path within the project root.
    fn resolve_path(&self, path: &str) -> PathBuf;
}
