//! Export script use case.

use std::path::PathBuf;

use crate::error::{ApplicationError, ApplicationResult};
use crate::ports::FileSystem;

/// Input for exporting a script.
#[derive(Debug, Clone)]
pub struct ExportScriptInput {
    /// Destination file.
    pub path: PathBuf,
    /// Script text to write.
    pub script: String,
    /// Whether an existing file may be replaced.
    pub overwrite: bool,
}

/// Use case for writing a generated script to disk.
pub struct ExportScript<F: FileSystem> {
    fs: F,
}

impl<F: FileSystem> ExportScript<F> {
    /// Creates a new `ExportScript` use case.
    #[must_use]
    pub const fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Writes the script, appending a trailing newline.
    ///
    /// # Errors
    /// - Returns `ApplicationError::AlreadyExists` if the file exists and
    ///   `overwrite` is false
    /// - Returns error if the write fails
    pub async fn execute(&self, input: ExportScriptInput) -> ApplicationResult<()> {
        if !input.overwrite && self.fs.exists(&input.path).await {
            return Err(ApplicationError::AlreadyExists(input.path));
        }

        let mut contents = input.script;
        contents.push('\n');
        self.fs.write_file(&input.path, contents.as_bytes()).await?;

        tracing::info!(path = %input.path.display(), "exported script");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ports::FileSystemError;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::path::Path;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryFileSystem {
        files: Mutex<HashMap<PathBuf, Vec<u8>>>,
    }

    impl FileSystem for MemoryFileSystem {
        async fn read_file_string(&self, path: &Path) -> Result<String, FileSystemError> {
            self.files
                .lock()
                .unwrap()
                .get(path)
                .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
                .ok_or_else(|| FileSystemError::NotFound(path.to_path_buf()))
        }

        async fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError> {
            self.files
                .lock()
                .unwrap()
                .insert(path.to_path_buf(), contents.to_vec());
            Ok(())
        }

        async fn exists(&self, path: &Path) -> bool {
            self.files.lock().unwrap().contains_key(path)
        }
    }

    #[tokio::test]
    async fn test_export_writes_script() {
        let export = ExportScript::new(MemoryFileSystem::default());
        let path = PathBuf::from("/out/login.loli");

        export
            .execute(ExportScriptInput {
                path: path.clone(),
                script: "SET TIMEOUT 30".to_string(),
                overwrite: false,
            })
            .await
            .unwrap();

        let written = export.fs.read_file_string(&path).await.unwrap();
        assert_eq!(written, "SET TIMEOUT 30\n");
    }

    #[tokio::test]
    async fn test_export_refuses_overwrite() {
        let export = ExportScript::new(MemoryFileSystem::default());
        let input = ExportScriptInput {
            path: PathBuf::from("/out/a.loli"),
            script: "first".to_string(),
            overwrite: false,
        };
        export.execute(input.clone()).await.unwrap();

        assert!(matches!(
            export.execute(input.clone()).await,
            Err(ApplicationError::AlreadyExists(_))
        ));
        export
            .execute(ExportScriptInput {
                overwrite: true,
                script: "second".to_string(),
                ..input
            })
            .await
            .unwrap();

        let written = export.fs.read_file_string(Path::new("/out/a.loli")).await.unwrap();
        assert_eq!(written, "second\n");
    }
}
