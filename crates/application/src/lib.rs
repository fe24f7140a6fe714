//! Har2loli Application - Use cases and ports
//!
//! This crate holds the LoliCode engine and the use cases built on it.
//! It defines ports (traits) that infrastructure adapters implement.

pub mod error;
pub mod lolicode;
pub mod ports;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
