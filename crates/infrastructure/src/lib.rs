//! Har2loli Infrastructure - Adapters and implementations
//!
//! This crate provides HAR import, file-backed persistence and the
//! concrete implementations of the ports defined in the application layer.

pub mod import;
pub mod persistence;
pub mod serialization;

pub use import::{
    EntryOutcome, ExchangeSummary, HarImport, HarImporter, ImportError, ImportWarning, summarize,
};
pub use persistence::{Project, ProjectError, ProjectFormat, ProjectRepository, TokioFileSystem};
pub use serialization::{SerializationError, from_json, to_json_stable};
