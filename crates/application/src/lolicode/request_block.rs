//! `REQUEST` block builder.

use har2loli_domain::{CustomHeader, Headers, Request};

use super::INDENT;

/// User agent emitted on every request block.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/110.0.0.0 Safari/537.36";

/// Headers never copied from the merged set; they have dedicated lines.
const SKIPPED_HEADERS: [&str; 3] = ["user-agent", "cookie", "content-length"];

/// Builds the `REQUEST` block for a captured request.
///
/// Enabled overlay headers replace captured headers with the same
/// case-folded name (or are appended); disabled overlay headers suppress the
/// captured header entirely.
#[must_use]
pub fn build_request_block(request: &Request, overlay: Option<&[CustomHeader]>) -> String {
    let mut lines = Vec::new();

    // A blank captured method replays as GET
    let method = request.normalized_method();
    if method.is_empty() || method == "GET" {
        lines.push(format!("REQUEST \"{}\"", request.url));
    } else {
        lines.push(format!("REQUEST \"{}\" {}", request.url, method));
    }

    lines.push(format!("{INDENT}\"User-Agent: {DEFAULT_USER_AGENT}\""));

    let headers = merge_headers(&request.headers, overlay.unwrap_or_default());
    for (name, value) in headers.iter() {
        if SKIPPED_HEADERS.iter().any(|s| name.eq_ignore_ascii_case(s)) {
            continue;
        }
        lines.push(format!("{INDENT}\"{name}: {value}\""));
    }

    if !request.cookies.is_empty() {
        let cookies = request
            .cookies
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ");
        lines.push(format!("{INDENT}\"Cookie: {cookies}\""));
    }

    if let Some(body) = &request.body {
        lines.push(format!("{INDENT}CONTENT \"{}\"", escape_content(&body.data)));
        lines.push(format!(
            "{INDENT}\"Content-Type: {}\"",
            body.kind.content_type()
        ));
    }

    lines.join("\n")
}

/// Escapes a payload for a quoted `CONTENT` string.
///
/// Backslashes must be escaped before quotes, otherwise the backslashes
/// introduced for quotes would be doubled.
#[must_use]
pub fn escape_content(data: &str) -> String {
    data.replace('\\', "\\\\").replace('"', "\\\"")
}

fn merge_headers(captured: &Headers, overlay: &[CustomHeader]) -> Headers {
    let mut merged = captured.clone();
    for header in overlay.iter().filter(|h| h.enabled) {
        merged.insert(header.key.to_ascii_lowercase(), header.value.clone());
    }
    // Disabled entries win over anything captured or enabled.
    for header in overlay.iter().filter(|h| !h.enabled) {
        merged.remove(&header.key);
    }
    merged
}
