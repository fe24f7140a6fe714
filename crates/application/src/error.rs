//! Application error types

use std::path::PathBuf;

use har2loli_domain::GenerateError;
use thiserror::Error;

use crate::ports::FileSystemError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Script generation failed.
    #[error("generation failed: {0}")]
    Generate(#[from] GenerateError),

    /// A file system operation failed.
    #[error("file system error: {0}")]
    FileSystem(#[from] FileSystemError),

    /// The target file exists and overwriting was not allowed.
    #[error("refusing to overwrite {}", .0.display())]
    AlreadyExists(PathBuf),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
