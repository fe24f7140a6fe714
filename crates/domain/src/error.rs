//! Domain error types

use thiserror::Error;

/// Structurally invalid generator input.
///
/// Always surfaced to the caller; it points at an integration bug upstream.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// An index in one of the configuration fields does not address an exchange.
    #[error("{field} references index {index}, but only {len} exchanges exist")]
    IndexOutOfRange {
        /// The configuration field holding the bad reference.
        field: &'static str,
        /// The offending index.
        index: usize,
        /// Number of exchanges available.
        len: usize,
    },

    /// The same index was selected more than once.
    #[error("selected_indices contains index {0} more than once")]
    DuplicateSelection(usize),
}

/// The requested emission order cannot be honoured.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderingError {
    /// A selected index is absent from the topological order.
    #[error("topological order is missing selected index {0}")]
    MissingIndex(usize),

    /// A selected index appears more than once in the topological order.
    #[error("topological order lists selected index {0} more than once")]
    DuplicateIndex(usize),

    /// The topological order references an index outside the exchange range.
    #[error("topological order references index {index}, but only {len} exchanges exist")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of exchanges available.
        len: usize,
    },

    /// The dependency graph contains a cycle.
    #[error("dependency cycle between exchanges {0:?}")]
    Cycle(Vec<usize>),
}

/// Errors raised by a script generation call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// Bad index references in the configuration.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Incomplete or cyclic ordering.
    #[error("ordering error: {0}")]
    Ordering(#[from] OrderingError),
}

/// Result type alias for generation.
pub type GenerateResult<T> = Result<T, GenerateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_names_index() {
        let err = ConfigurationError::IndexOutOfRange {
            field: "assertions",
            index: 7,
            len: 3,
        };
        let message = err.to_string();
        assert!(message.contains("assertions"));
        assert!(message.contains('7'));
    }

    #[test]
    fn generate_error_wraps_ordering() {
        let err: GenerateError = OrderingError::MissingIndex(1).into();
        assert!(matches!(err, GenerateError::Ordering(OrderingError::MissingIndex(1))));
        assert!(err.to_string().contains("missing selected index 1"));
    }
}
