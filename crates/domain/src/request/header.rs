//! Captured HTTP header map

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Captured request headers.
///
/// Keys keep their captured spelling and insertion order, but lookups and
/// replacement compare names case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Headers {
    items: IndexMap<String, String>,
}

impl Headers {
    /// Creates an empty header map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a header, replacing any existing entry with the same
    /// case-folded name in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(index) => {
                self.items.shift_remove_index(index);
                self.items.shift_insert(index, name, value);
            }
            None => {
                self.items.insert(name, value);
            }
        }
    }

    /// Removes a header, ignoring name case. Returns the removed value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.position(name)
            .and_then(|index| self.items.shift_remove_index(index))
            .map(|(_, value)| value)
    }

    /// Returns the value of a header, ignoring name case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name)
            .and_then(|index| self.items.get_index(index))
            .map(|(_, value)| value.as_str())
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.items.keys().position(|k| k.eq_ignore_ascii_case(name))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Headers {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}
