//! `RepositoryFilesystem` implementation for `FilesystemStore`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::RepositoryFilesystem;

use super::FilesystemStore;

impl RepositoryFilesystem for FilesystemStore {
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        self.ensure_within_root(Path::new(path))?;
        fs::write(self.resolve_path(path), content).map_err(AppError::from)
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}
