//! Deterministic JSON serialization for reports and project files.
//!
//! Output uses 2-space indentation and a trailing newline so written files
//! diff cleanly.

mod json;

pub use json::*;
