//! HAR 1.2 Type Definitions
//!
//! Only the fields the importer reads are modelled. All types use
//! `#[serde(default)]` so partial captures still deserialize.

#![allow(missing_docs)]

use serde::Deserialize;

/// One `log.entries[]` element.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HarEntry {
    pub request: HarRequest,
    pub response: HarResponse,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HarRequest {
    pub method: Option<String>,
    pub url: String,
    pub headers: Vec<HarNameValue>,
    pub cookies: Vec<HarNameValue>,
    pub post_data: Option<HarPostData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HarNameValue {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HarPostData {
    pub mime_type: String,
    pub text: Option<String>,
    pub params: Vec<HarNameValue>,
}

impl HarPostData {
    /// True when the capture recorded nothing at all for the body.
    pub fn is_blank(&self) -> bool {
        self.mime_type.is_empty() && self.text.is_none() && self.params.is_empty()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HarResponse {
    pub status: i64,
}
