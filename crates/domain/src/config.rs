//! Generator configuration.
//!
//! Holds the selection of exchanges to emit, the sparse per-exchange
//! overrides and the global script settings.

use serde::{Deserialize, Serialize};

use crate::overrides::{Assertion, CustomHeader, Extraction, OverrideMap};

/// Global settings realized as directives at the top of the script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptSettings {
    /// Route requests through the runner's proxy pool.
    #[serde(default = "default_use_proxy")]
    pub use_proxy: bool,

    /// Follow HTTP redirects automatically.
    #[serde(default = "default_follow_redirects")]
    pub follow_redirects: bool,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_seconds", alias = "timeout")]
    pub timeout_seconds: u32,

    /// How many times a failed attempt is retried.
    #[serde(default)]
    pub retry_count: u32,
}

const fn default_use_proxy() -> bool {
    true
}

const fn default_follow_redirects() -> bool {
    true
}

const fn default_timeout_seconds() -> u32 {
    30
}

impl Default for ScriptSettings {
    fn default() -> Self {
        Self {
            use_proxy: default_use_proxy(),
            follow_redirects: default_follow_redirects(),
            timeout_seconds: default_timeout_seconds(),
            retry_count: 0,
        }
    }
}

impl ScriptSettings {
    /// No proxy, short timeout, no retries.
    #[must_use]
    pub const fn fast() -> Self {
        Self {
            use_proxy: false,
            follow_redirects: true,
            timeout_seconds: 10,
            retry_count: 0,
        }
    }

    /// Proxied, long timeout, three retries.
    #[must_use]
    pub const fn secure() -> Self {
        Self {
            use_proxy: true,
            follow_redirects: true,
            timeout_seconds: 60,
            retry_count: 3,
        }
    }
}

/// Named settings presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SettingsPreset {
    /// [`ScriptSettings::default`]
    #[default]
    Default,
    /// [`ScriptSettings::fast`]
    Fast,
    /// [`ScriptSettings::secure`]
    Secure,
}

impl SettingsPreset {
    /// Returns the settings for this preset.
    #[must_use]
    pub fn settings(self) -> ScriptSettings {
        match self {
            Self::Default => ScriptSettings::default(),
            Self::Fast => ScriptSettings::fast(),
            Self::Secure => ScriptSettings::secure(),
        }
    }
}

/// Everything the generator needs besides the exchanges and the ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Exchanges to emit. Must be unique.
    #[serde(default)]
    pub selected_indices: Vec<usize>,

    /// Extra or suppressed headers per exchange.
    #[serde(default, skip_serializing_if = "OverrideMap::is_empty")]
    pub custom_headers: OverrideMap<CustomHeader>,

    /// Keychecks per exchange. Absent indices get a default status check.
    #[serde(default, alias = "custom_assertions", skip_serializing_if = "OverrideMap::is_empty")]
    pub assertions: OverrideMap<Assertion>,

    /// Parse blocks per exchange.
    #[serde(default, alias = "variable_extractions", skip_serializing_if = "OverrideMap::is_empty")]
    pub extractions: OverrideMap<Extraction>,

    /// Global script settings.
    #[serde(default)]
    pub settings: ScriptSettings,
}

impl GeneratorConfig {
    /// Creates a configuration selecting the given indices with no overrides.
    #[must_use]
    pub fn selecting(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            selected_indices: indices.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Replaces the custom headers for an index.
    #[must_use]
    pub fn with_headers(mut self, index: usize, headers: Vec<CustomHeader>) -> Self {
        self.custom_headers.insert(index, headers);
        self
    }

    /// Replaces the assertions for an index.
    #[must_use]
    pub fn with_assertions(mut self, index: usize, assertions: Vec<Assertion>) -> Self {
        self.assertions.insert(index, assertions);
        self
    }

    /// Replaces the extractions for an index.
    #[must_use]
    pub fn with_extractions(mut self, index: usize, extractions: Vec<Extraction>) -> Self {
        self.extractions.insert(index, extractions);
        self
    }

    /// Replaces the settings.
    #[must_use]
    pub const fn with_settings(mut self, settings: ScriptSettings) -> Self {
        self.settings = settings;
        self
    }
}
