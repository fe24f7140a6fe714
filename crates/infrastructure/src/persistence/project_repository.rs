//! Project file loading.
//!
//! A project file holds the generator configuration and the ordering choice
//! for one capture. YAML and JSON are both accepted; the format is picked
//! from the file extension (`.json` is JSON, anything else is YAML).

use std::path::Path;

use har2loli_application::ports::{FileSystem, FileSystemError};
use har2loli_domain::{GeneratorConfig, OrderingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::serialization::{SerializationError, from_json, to_json_stable};

/// Errors that can occur while loading or saving a project.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// Reading or writing the file failed.
    #[error(transparent)]
    FileSystem(#[from] FileSystemError),

    /// The JSON project could not be (de)serialized.
    #[error("invalid JSON project: {0}")]
    Json(#[from] SerializationError),

    /// The YAML project could not be (de)serialized.
    #[error("invalid YAML project: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Everything needed to regenerate a script from a capture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Selection, overrides and settings.
    #[serde(default)]
    pub config: GeneratorConfig,
    /// How the emission order is chosen.
    #[serde(default)]
    pub ordering: OrderingStrategy,
}

impl Project {
    /// Parses project content in the given format.
    ///
    /// # Errors
    /// Returns an error if the content does not describe a project.
    pub fn parse(content: &str, format: ProjectFormat) -> Result<Self, ProjectError> {
        match format {
            ProjectFormat::Json => Ok(from_json(content)?),
            ProjectFormat::Yaml => Ok(serde_yaml::from_str(content)?),
        }
    }

    /// Renders the project in the given format.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn render(&self, format: ProjectFormat) -> Result<String, ProjectError> {
        match format {
            ProjectFormat::Json => Ok(to_json_stable(self)?),
            ProjectFormat::Yaml => Ok(serde_yaml::to_string(self)?),
        }
    }
}

/// Serialization format of a project file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectFormat {
    /// `.json`
    Json,
    /// `.yaml`, `.yml` and anything else
    Yaml,
}

impl ProjectFormat {
    /// Picks the format for a path by extension.
    #[must_use]
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Loads and saves project files through a [`FileSystem`].
pub struct ProjectRepository<F: FileSystem> {
    fs: F,
}

impl<F: FileSystem> ProjectRepository<F> {
    /// Creates a new repository.
    #[must_use]
    pub const fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Loads a project file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub async fn load(&self, path: &Path) -> Result<Project, ProjectError> {
        let content = self.fs.read_file_string(path).await?;
        let project = Project::parse(&content, ProjectFormat::for_path(path))?;
        tracing::debug!(
            path = %path.display(),
            selected = project.config.selected_indices.len(),
            "loaded project"
        );
        Ok(project)
    }

    /// Saves a project file in the format implied by its extension.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub async fn save(&self, path: &Path, project: &Project) -> Result<(), ProjectError> {
        let content = project.render(ProjectFormat::for_path(path))?;
        self.fs.write_file(path, content.as_bytes()).await?;
        Ok(())
    }
}
