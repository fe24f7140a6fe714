//! har2loli Domain - Core types
//!
//! This crate defines the data model for turning captured HTTP exchanges
//! into LoliCode scripts. All types here are plain values with no I/O.

pub mod config;
pub mod error;
pub mod exchange;
pub mod ordering;
pub mod overrides;
pub mod request;
pub mod validation;

pub use config::{GeneratorConfig, ScriptSettings, SettingsPreset};
pub use error::{ConfigurationError, GenerateError, GenerateResult, OrderingError};
pub use exchange::{Exchange, Response};
pub use ordering::{OrderingPlan, OrderingStrategy};
pub use overrides::{
    Assertion, AssertionAction, AssertionKind, CustomHeader, Extraction, ExtractionKind,
    OverrideMap,
};
pub use request::{BodyKind, Headers, Request, RequestBody};
pub use validation::ValidationResult;
