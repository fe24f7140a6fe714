//! `KEYCHECK` block builder.

use har2loli_domain::{Assertion, AssertionAction, AssertionKind, Response};

use super::INDENT;

/// Builds a `KEYCHECK` block for an assertion.
///
/// Returns an empty string for [`AssertionKind::Unknown`]; callers omit
/// empty blocks.
#[must_use]
pub fn build_keycheck_block(assertion: &Assertion) -> String {
    let key = match assertion.kind {
        AssertionKind::Status => {
            format!("KEY \"<RESPONSE.STATUS>\" Equal \"{}\"", assertion.value)
        }
        AssertionKind::Contains => {
            format!("KEY \"<RESPONSE.BODY>\" Contains \"{}\"", assertion.value)
        }
        AssertionKind::Regex => {
            format!("KEY \"<RESPONSE.BODY>\" RegexMatch \"{}\"", assertion.value)
        }
        AssertionKind::JsonPath => format!(
            "KEY \"<RESPONSE.BODY>\" JsonPath \"{}\" Equal \"{}\"",
            assertion.value,
            assertion.expected_result.as_deref().unwrap_or_default()
        ),
        AssertionKind::Unknown => return String::new(),
    };

    format!("{}\n{INDENT}{key}", keycheck_header(assertion.action))
}

/// Builds the fallback status check used when an exchange has no assertions.
///
/// 2xx statuses are checked as `SUCCESS`, everything else as `FAIL`.
#[must_use]
pub fn build_status_check(status: u16) -> String {
    let action = if Response::new(status).is_success() {
        AssertionAction::Success
    } else {
        AssertionAction::Fail
    };
    format!("KEYCHECK {action}\n{INDENT}KEY \"<RESPONSE.STATUS>\" Equal \"{status}\"")
}

fn keycheck_header(action: AssertionAction) -> String {
    match action {
        AssertionAction::Success => "KEYCHECK".to_string(),
        other => format!("KEYCHECK {other}"),
    }
}
