//! JSON serialization helpers for deterministic output.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// JSON deserialization failed.
    #[error("JSON deserialization failed: {0}")]
    Deserialize(serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serializes a value to deterministic JSON.
///
/// Output format:
/// - 2-space indentation
/// - Trailing newline
/// - Field order follows the type definition
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_stable<T: Serialize>(value: &T) -> Result<String, SerializationError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    let mut json = String::from_utf8(buffer)?;
    json.push('\n');
    Ok(json)
}

/// Deserializes JSON from a string.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or doesn't match the expected type.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, SerializationError> {
    serde_json::from_str(json).map_err(SerializationError::Deserialize)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use har2loli_domain::{GeneratorConfig, ValidationResult};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validation_report_layout() {
        let report = ValidationResult::from_errors(vec!["Line 2: Unmatched quotes".to_string()]);
        let json = to_json_stable(&report).unwrap();

        assert_eq!(
            json,
            "{\n  \"is_valid\": false,\n  \"errors\": [\n    \"Line 2: Unmatched quotes\"\n  ]\n}\n"
        );
    }

    #[test]
    fn test_output_is_stable() {
        let config = GeneratorConfig::selecting([2, 0]);
        assert_eq!(to_json_stable(&config).unwrap(), to_json_stable(&config).unwrap());
    }

    #[test]
    fn test_roundtrip_config() {
        let original = GeneratorConfig::selecting([1, 3]);
        let json = to_json_stable(&original).unwrap();
        let restored: GeneratorConfig = from_json(&json).unwrap();
        assert_eq!(original, restored);
    }

    #[test]
    fn test_from_json_invalid() {
        let result: Result<GeneratorConfig, _> = from_json(r#"{"selected_indices": }"#);
        assert!(matches!(result, Err(SerializationError::Deserialize(_))));
    }
}
