//! Writing env files under the project root.

use std::path::PathBuf;

use tracing::info;

use crate::domain::{AppError, EnvFile};
use crate::ports::RepositoryFilesystem;

/// Overwrite `file` under the project root and return its resolved path.
pub fn write_env_file<F: RepositoryFilesystem>(
    filesystem: &F,
    file: &EnvFile,
) -> Result<PathBuf, AppError> {
    filesystem.write_file(file.path(), &file.render())?;
    let path = filesystem.resolve_path(file.path());
    info!("wrote {} entries to {}", file.len(), path.display());
    Ok(path)
}
