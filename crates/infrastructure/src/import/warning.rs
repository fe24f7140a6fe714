//! Per-entry HAR import diagnostics.

/// What the importer did with the entry a warning refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Imported with a value replaced by a default.
    Normalized,
    /// Imported as captured, but it may not replay as expected.
    Suspect,
    /// Not imported; no exchange exists for this entry.
    Skipped,
}

impl std::fmt::Display for EntryOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Normalized => "normalized",
            Self::Suspect => "suspect",
            Self::Skipped => "skipped",
        })
    }
}

/// A note about one `log.entries[]` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportWarning {
    /// Position of the entry in the capture's entry list.
    pub entry: usize,
    /// What happened to the entry.
    pub outcome: EntryOutcome,
    /// Human-readable description of the issue.
    pub message: String,
}

impl ImportWarning {
    /// The entry was imported with a defaulted value.
    #[must_use]
    pub fn normalized(entry: usize, message: impl Into<String>) -> Self {
        Self {
            entry,
            outcome: EntryOutcome::Normalized,
            message: message.into(),
        }
    }

    /// The entry was imported but looks wrong.
    #[must_use]
    pub fn suspect(entry: usize, message: impl Into<String>) -> Self {
        Self {
            entry,
            outcome: EntryOutcome::Suspect,
            message: message.into(),
        }
    }

    /// The entry was dropped.
    #[must_use]
    pub fn skipped(entry: usize, message: impl Into<String>) -> Self {
        Self {
            entry,
            outcome: EntryOutcome::Skipped,
            message: message.into(),
        }
    }

    /// True if the entry produced no exchange.
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self.outcome, EntryOutcome::Skipped)
    }
}

impl std::fmt::Display for ImportWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "entry {} {}: {}", self.entry, self.outcome, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_names_entry_and_outcome() {
        let warning = ImportWarning::skipped(4, "not an object");
        assert_eq!(warning.to_string(), "entry 4 skipped: not an object");
        assert!(warning.is_skipped());
    }

    #[test]
    fn test_only_skipped_is_skipped() {
        assert!(!ImportWarning::normalized(0, "status -1 recorded as 0").is_skipped());
        assert!(!ImportWarning::suspect(0, "relative url").is_skipped());
    }
}
