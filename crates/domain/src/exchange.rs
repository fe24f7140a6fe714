//! Captured request/response exchanges.

use serde::{Deserialize, Serialize};

use crate::request::Request;

/// The part of a captured response the generator cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Response {
    /// HTTP status code observed during capture
    #[serde(default)]
    pub status: u16,
}

impl Response {
    /// Creates a response with the given status.
    #[must_use]
    pub const fn new(status: u16) -> Self {
        Self { status }
    }

    /// Returns true for 2xx statuses.
    #[must_use]
    pub const fn is_success(self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// One captured HTTP request/response pair.
///
/// Exchanges carry no identifier; they are addressed by their position in
/// the captured sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    /// The captured request
    pub request: Request,
    /// The captured response
    #[serde(default)]
    pub response: Response,
}

impl Exchange {
    /// Creates an exchange.
    #[must_use]
    pub const fn new(request: Request, response: Response) -> Self {
        Self { request, response }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(!Response::new(199).is_success());
        assert!(Response::new(200).is_success());
        assert!(Response::new(299).is_success());
        assert!(!Response::new(300).is_success());
    }
}
