//! Per-exchange override records.
//!
//! Overrides are layered onto captured exchanges at generation time: custom
//! headers patch the request, assertions become keycheck blocks and
//! extractions become parse blocks. They are stored sparsely, keyed by the
//! index of the exchange they apply to.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A header to add to, or suppress from, a captured request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomHeader {
    /// The header name
    pub key: String,
    /// The header value
    pub value: String,
    /// Whether this header is applied. Disabled headers stay in the
    /// configuration so they can be toggled back on.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

const fn default_enabled() -> bool {
    true
}

impl CustomHeader {
    /// Creates a new enabled header.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            enabled: true,
        }
    }

    /// Creates a new disabled header.
    #[must_use]
    pub fn disabled(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            enabled: false,
        }
    }
}

/// What a keycheck inspects in the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssertionKind {
    /// Response status equals the value.
    Status,
    /// Response body contains the value.
    Contains,
    /// Response body matches the value as a regex.
    Regex,
    /// A JSON path into the body equals the expected result.
    #[serde(alias = "jsonPath", alias = "jsonpath")]
    JsonPath,
    /// Any kind this version does not know. Emits nothing.
    #[serde(other)]
    Unknown,
}

/// Outcome a keycheck triggers when it matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AssertionAction {
    /// Mark the attempt as a hit.
    #[default]
    Success,
    /// Mark the attempt as a failure.
    Fail,
    /// Retry the attempt.
    Retry,
    /// Ban the current proxy.
    Ban,
}

impl AssertionAction {
    /// Returns the upper-case token used in `KEYCHECK` headers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Fail => "FAIL",
            Self::Retry => "RETRY",
            Self::Ban => "BAN",
        }
    }
}

impl std::fmt::Display for AssertionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A response assertion, emitted as a keycheck block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assertion {
    /// What to inspect
    #[serde(alias = "type")]
    pub kind: AssertionKind,
    /// Value to compare, search for, or the JSON path
    pub value: String,
    /// Expected value at the JSON path (only meaningful for `JsonPath`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_result: Option<String>,
    /// Outcome when the check matches
    #[serde(default)]
    pub action: AssertionAction,
}

impl Assertion {
    /// Creates an assertion with the default `Success` action.
    #[must_use]
    pub fn new(kind: AssertionKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            expected_result: None,
            action: AssertionAction::Success,
        }
    }

    /// Creates a JSON path assertion.
    #[must_use]
    pub fn json_path(path: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            kind: AssertionKind::JsonPath,
            value: path.into(),
            expected_result: Some(expected.into()),
            action: AssertionAction::Success,
        }
    }

    /// Sets the action.
    #[must_use]
    pub const fn with_action(mut self, action: AssertionAction) -> Self {
        self.action = action;
        self
    }
}

/// How a parse block extracts a value from the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionKind {
    /// Regular expression capture
    Regex,
    /// JSON path / token lookup
    Json,
    /// CSS selector
    Css,
    /// XPath expression
    Xpath,
    /// Any kind this version does not know. Emits nothing.
    #[serde(other)]
    Unknown,
}

impl ExtractionKind {
    /// Returns the upper-case token used in `PARSE` lines, or `None` for
    /// unknown kinds.
    #[must_use]
    pub const fn token(self) -> Option<&'static str> {
        match self {
            Self::Regex => Some("REGEX"),
            Self::Json => Some("JSON"),
            Self::Css => Some("CSS"),
            Self::Xpath => Some("XPATH"),
            Self::Unknown => None,
        }
    }
}

/// A variable extraction, emitted as a parse block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// Extraction method
    #[serde(alias = "type")]
    pub kind: ExtractionKind,
    /// Pattern, selector or path
    pub pattern: String,
    /// Name of the variable receiving the value
    pub variable_name: String,
    /// Whether the variable is global rather than local to the attempt
    #[serde(default)]
    pub is_global: bool,
}

impl Extraction {
    /// Creates an extraction into a local variable.
    #[must_use]
    pub fn new(
        kind: ExtractionKind,
        pattern: impl Into<String>,
        variable_name: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            pattern: pattern.into(),
            variable_name: variable_name.into(),
            is_global: false,
        }
    }

    /// Marks the extracted variable as global.
    #[must_use]
    pub const fn global(mut self) -> Self {
        self.is_global = true;
        self
    }
}

/// Sparse, insertion-ordered map from exchange index to override records.
///
/// A missing key means "no overrides configured"; a key mapped to an empty
/// list is a deliberate, distinct configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverrideMap<T> {
    entries: IndexMap<usize, Vec<T>>,
}

impl<T> Default for OverrideMap<T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<T> OverrideMap<T> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the overrides for an index, returning the previous list.
    pub fn insert(&mut self, index: usize, items: Vec<T>) -> Option<Vec<T>> {
        self.entries.insert(index, items)
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, index: usize, items: Vec<T>) -> Self {
        self.entries.insert(index, items);
        self
    }

    /// Returns the overrides configured for an index, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&[T]> {
        self.entries.get(&index).map(Vec::as_slice)
    }

    /// Iterates over configured indices in insertion order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.keys().copied()
    }

    /// Iterates over `(index, overrides)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[T])> {
        self.entries.iter().map(|(i, items)| (*i, items.as_slice()))
    }

    /// Returns true if no index has overrides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> FromIterator<(usize, Vec<T>)> for OverrideMap<T> {
    fn from_iter<I: IntoIterator<Item = (usize, Vec<T>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
