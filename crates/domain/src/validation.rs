//! Script validation results.

use serde::{Deserialize, Serialize};

/// Outcome of validating a generated script.
///
/// Validation is advisory: an invalid result does not stop a script from
/// being produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True when `errors` is empty.
    pub is_valid: bool,
    /// Problems found, in discovery order.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Builds a result from accumulated errors.
    #[must_use]
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}
