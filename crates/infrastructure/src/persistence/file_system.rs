//! Real file system implementation.

use std::path::Path;

use har2loli_application::ports::{FileSystem, FileSystemError};
use tokio::fs;

/// Real file system implementation using `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileSystem;

impl TokioFileSystem {
    /// Creates a new `TokioFileSystem`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FileSystem for TokioFileSystem {
    async fn read_file_string(&self, path: &Path) -> Result<String, FileSystemError> {
        fs::read_to_string(path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => FileSystemError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => {
                FileSystemError::PermissionDenied(path.to_path_buf())
            }
            _ => FileSystemError::Io(e),
        })
    }

    async fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(path, contents).await.map_err(FileSystemError::Io)
    }

    async fn exists(&self, path: &Path) -> bool {
        fs::metadata(path).await.is_ok()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_creates_parents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("scripts/nested/login.loli");
        let fs = TokioFileSystem::new();

        fs.write_file(&path, b"SET TIMEOUT 30").await.unwrap();

        assert!(fs.exists(&path).await);
        assert_eq!(fs.read_file_string(&path).await.unwrap(), "SET TIMEOUT 30");
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.har");

        let err = TokioFileSystem::new().read_file_string(&path).await.unwrap_err();
        assert!(matches!(err, FileSystemError::NotFound(p) if p == path));
    }
}
