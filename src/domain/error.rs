use std::io;

use thiserror::Error;

/// Library-wide error type for mapme-setup operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Project root directory does not exist.
    #[error("Project root '{0}' does not exist")]
    RootNotFound(String),

    /// Path escapes the project root.
    #[error("Path '{0}' escapes the project root")]
    PathTraversal(String),

    /// Reading operator input failed or was interrupted.
    #[error("Failed to read value for {key}: {details}")]
    Prompt { key: String, details: String },
}

impl AppError {
    pub fn prompt_error(key: &str, details: impl ToString) -> Self {
        AppError::Prompt { key: key.to_string(), details: details.to_string() }
    }

    /// Map the error onto the closest `io::ErrorKind`.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::PathTraversal(_) => io::ErrorKind::InvalidInput,
            AppError::RootNotFound(_) => io::ErrorKind::NotFound,
            AppError::Prompt { .. } => io::ErrorKind::Interrupted,
        }
    }
}
