//! File-backed persistence adapters.

mod file_system;
mod project_repository;

pub use file_system::TokioFileSystem;
pub use project_repository::{Project, ProjectError, ProjectFormat, ProjectRepository};
