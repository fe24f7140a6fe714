//! Capture importers.

pub mod har;
pub mod warning;

pub use har::{ExchangeSummary, HarImport, HarImporter, ImportError, summarize};
pub use warning::{EntryOutcome, ImportWarning};
