//! HTTP Request body types

use serde::{Deserialize, Serialize};

/// The kind of captured request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    /// JSON payload
    Json,
    /// URL-encoded form payload
    #[default]
    Form,
}

impl BodyKind {
    /// Returns the `Content-Type` emitted for this kind of body.
    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Form => "application/x-www-form-urlencoded",
        }
    }
}

/// Captured request payload with its content kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestBody {
    /// Raw payload as UTF-8 text
    pub data: String,
    /// The kind of body
    #[serde(default, alias = "content_type")]
    pub kind: BodyKind,
}

impl RequestBody {
    /// Creates a JSON body.
    #[must_use]
    pub fn json(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            kind: BodyKind::Json,
        }
    }

    /// Creates a URL-encoded form body.
    #[must_use]
    pub fn form(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            kind: BodyKind::Form,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_body() {
        let body = RequestBody::json(r#"{"key": "value"}"#);
        assert_eq!(body.kind.content_type(), "application/json");
    }

    #[test]
    fn test_form_body() {
        let body = RequestBody::form("user=a&pass=b");
        assert_eq!(body.kind.content_type(), "application/x-www-form-urlencoded");
    }
}
