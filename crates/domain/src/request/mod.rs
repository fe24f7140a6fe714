//! Captured HTTP request types

mod body;
mod header;

pub use body::{BodyKind, RequestBody};
pub use header::Headers;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A request as captured in an exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Target URL
    pub url: String,
    /// HTTP method as captured (e.g. "GET", "POST")
    #[serde(default = "default_method")]
    pub method: String,
    /// Captured headers
    #[serde(default)]
    pub headers: Headers,
    /// Captured cookies, in capture order
    #[serde(default)]
    pub cookies: IndexMap<String, String>,
    /// Optional payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<RequestBody>,
}

fn default_method() -> String {
    "GET".to_string()
}

impl Request {
    /// Creates a request with the given method and URL.
    #[must_use]
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: method.into(),
            headers: Headers::new(),
            cookies: IndexMap::new(),
            body: None,
        }
    }

    /// Creates a GET request with the given URL.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self::new("GET", url)
    }

    /// Creates a POST request with the given URL.
    #[must_use]
    pub fn post(url: impl Into<String>) -> Self {
        Self::new("POST", url)
    }

    /// Adds a header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Adds a cookie.
    #[must_use]
    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(name.into(), value.into());
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Returns the method upper-cased, the form used in emitted scripts.
    #[must_use]
    pub fn normalized_method(&self) -> String {
        self.method.trim().to_ascii_uppercase()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_get_request() {
        let req = Request::get("https://api.example.com/users");
        assert_eq!(req.method, "GET");
        assert_eq!(req.url, "https://api.example.com/users");
        assert!(req.body.is_none());
    }

    #[test]
    fn test_normalized_method() {
        let req = Request::new("post ", "https://example.com");
        assert_eq!(req.normalized_method(), "POST");
    }

    #[test]
    fn test_deserialize_defaults() {
        let req: Request = serde_json::from_str(r#"{"url": "https://example.com"}"#).unwrap();
        assert_eq!(req.method, "GET");
        assert_eq!(req.headers, Headers::new());
        assert!(req.cookies.is_empty());
    }
}
