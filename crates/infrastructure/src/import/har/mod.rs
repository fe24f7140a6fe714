//! HTTP Archive (HAR) import.
//!
//! Reads HAR 1.2 captures (as exported by browser developer tools) into
//! [`Exchange`](har2loli_domain::Exchange) values.

mod importer;
mod summary;
pub mod types;

pub use importer::{HarImport, HarImporter, ImportError};
pub use summary::{ExchangeSummary, summarize};
