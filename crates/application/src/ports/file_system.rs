//! File system port.

use std::future::Future;
use std::path::{Path, PathBuf};

/// Errors that can occur during file system operations.
#[derive(Debug, thiserror::Error)]
pub enum FileSystemError {
    /// The path does not exist.
    #[error("not found: {0}")]
    NotFound(PathBuf),

    /// Access to the path was denied.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Any other I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Minimal async file system used to read inputs and write scripts.
pub trait FileSystem: Send + Sync {
    /// Reads a whole file as UTF-8 text.
    ///
    /// # Errors
    /// Returns `FileSystemError::NotFound` if the file does not exist.
    fn read_file_string(
        &self,
        path: &Path,
    ) -> impl Future<Output = Result<String, FileSystemError>> + Send;

    /// Writes a file, creating parent directories as needed.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    fn write_file(
        &self,
        path: &Path,
        contents: &[u8],
    ) -> impl Future<Output = Result<(), FileSystemError>> + Send;

    /// Returns true if the path exists.
    fn exists(&self, path: &Path) -> impl Future<Output = bool> + Send;
}
