//! HAR importer implementation.

use std::path::Path;

use har2loli_application::ports::{FileSystem, FileSystemError};
use har2loli_domain::{Exchange, Request, RequestBody, Response};
use serde_json::Value;
use thiserror::Error;

use super::types::{HarEntry, HarPostData};
use crate::import::warning::ImportWarning;

/// Errors that abort a HAR import.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file could not be read.
    #[error("could not read capture: {0}")]
    FileSystem(#[from] FileSystemError),
    /// JSON parsing failed
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    /// The document is not a HAR capture
    #[error("Invalid HAR format: {0}")]
    InvalidFormat(String),
}

/// Exchanges read from a capture, plus anything noteworthy about the entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarImport {
    /// Exchanges in capture order.
    pub exchanges: Vec<Exchange>,
    /// Per-entry issues, in entry order.
    pub warnings: Vec<ImportWarning>,
}

impl HarImport {
    /// Entry positions that produced no exchange.
    #[must_use]
    pub fn skipped_entries(&self) -> Vec<usize> {
        self.warnings
            .iter()
            .filter(|w| w.is_skipped())
            .map(|w| w.entry)
            .collect()
    }
}

/// HAR capture importer.
pub struct HarImporter;

impl HarImporter {
    /// Reads and imports a HAR file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a HAR capture.
    pub async fn import_file<F: FileSystem>(fs: &F, path: &Path) -> Result<HarImport, ImportError> {
        let content = fs.read_file_string(path).await?;
        Self::import_str(&content)
    }

    /// Imports a HAR document.
    ///
    /// Accepts a full `{"log": {"entries": [...]}}` document or a bare array
    /// of entries. Malformed entries are skipped with a warning rather than
    /// failing the import.
    ///
    /// # Errors
    /// Returns an error if the content is not JSON or has no entry list.
    pub fn import_str(content: &str) -> Result<HarImport, ImportError> {
        let json: Value =
            serde_json::from_str(content).map_err(|e| ImportError::InvalidJson(e.to_string()))?;

        let mut import = HarImport::default();
        for (index, entry) in Self::entries(json)?.into_iter().enumerate() {
            if !entry.is_object() {
                import
                    .warnings
                    .push(ImportWarning::skipped(index, "entry is not an object, skipped"));
                continue;
            }
            match serde_json::from_value::<HarEntry>(entry) {
                Ok(entry) => import
                    .exchanges
                    .push(Self::map_entry(index, entry, &mut import.warnings)),
                Err(e) => import
                    .warnings
                    .push(ImportWarning::skipped(index, format!("malformed entry skipped: {e}"))),
            }
        }

        for warning in &import.warnings {
            tracing::warn!(%warning, "HAR import");
        }
        tracing::info!(
            exchanges = import.exchanges.len(),
            warnings = import.warnings.len(),
            "imported HAR capture"
        );
        Ok(import)
    }

    fn entries(json: Value) -> Result<Vec<Value>, ImportError> {
        match json {
            Value::Array(entries) => Ok(entries),
            Value::Object(mut root) => {
                let Some(Value::Object(mut log)) = root.remove("log") else {
                    return Err(ImportError::InvalidFormat("missing \"log\" object".to_string()));
                };
                match log.remove("entries") {
                    Some(Value::Array(entries)) => Ok(entries),
                    _ => Err(ImportError::InvalidFormat(
                        "\"log.entries\" is missing or not an array".to_string(),
                    )),
                }
            }
            _ => Err(ImportError::InvalidFormat(
                "expected a HAR document or an array of entries".to_string(),
            )),
        }
    }

    fn map_entry(index: usize, entry: HarEntry, warnings: &mut Vec<ImportWarning>) -> Exchange {
        let har = entry.request;

        if let Err(e) = url::Url::parse(&har.url) {
            warnings.push(ImportWarning::suspect(
                index,
                format!("url {:?} does not parse ({e})", har.url),
            ));
        }

        let mut request = Request::new(har.method.unwrap_or_else(|| "GET".to_string()), har.url);
        for header in har.headers {
            request.headers.insert(header.name.to_lowercase(), header.value);
        }
        for cookie in har.cookies {
            request.cookies.insert(cookie.name, cookie.value);
        }
        request.body = har
            .post_data
            .filter(|data| !data.is_blank())
            .map(|data| Self::map_body(index, data, warnings));

        let status = u16::try_from(entry.response.status).unwrap_or_else(|_| {
            warnings.push(ImportWarning::normalized(
                index,
                format!("status {} recorded as 0", entry.response.status),
            ));
            0
        });

        Exchange::new(request, Response::new(status))
    }

    fn map_body(index: usize, data: HarPostData, warnings: &mut Vec<ImportWarning>) -> RequestBody {
        let text = match data.text {
            Some(text) => text,
            None if !data.params.is_empty() => {
                let pairs: Vec<(&str, &str)> = data
                    .params
                    .iter()
                    .map(|p| (p.name.as_str(), p.value.as_str()))
                    .collect();
                serde_urlencoded::to_string(pairs).unwrap_or_else(|e| {
                    warnings.push(ImportWarning::normalized(
                        index,
                        format!("could not encode form params: {e}"),
                    ));
                    String::new()
                })
            }
            None => String::new(),
        };

        if is_json_mime(&data.mime_type) {
            RequestBody::json(text)
        } else {
            RequestBody::form(text)
        }
    }
}

/// True for `application/json`, `application/*+json` and friends.
fn is_json_mime(mime_type: &str) -> bool {
    mime_type.parse::<mime::Mime>().map_or_else(
        |_| mime_type.to_ascii_lowercase().contains("json"),
        |m| m.subtype() == mime::JSON || m.suffix() == Some(mime::JSON),
    )
}
