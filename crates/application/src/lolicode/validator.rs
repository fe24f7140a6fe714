//! Structural checks on generated scripts.

use har2loli_domain::ValidationResult;

/// Scanner position relative to `PARSE` lines.
///
/// Quote balance is not checked on `PARSE` lines: their patterns routinely
/// contain unescaped quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Outside,
    InsideParse,
}

impl ScanState {
    fn next(self, line: &str) -> Self {
        let trimmed = line.trim_start();
        if trimmed.starts_with("PARSE") {
            Self::InsideParse
        } else if ["KEYCHECK", "REQUEST", "FUNCTION"]
            .iter()
            .any(|keyword| trimmed.starts_with(keyword))
        {
            Self::Outside
        } else {
            self
        }
    }
}

/// Validates the structure of a script.
///
/// Rejects empty scripts, unresolved `undefined` / `None` placeholders,
/// lines with an odd number of double quotes (outside `PARSE` spans and
/// `CONTENT` lines) and
/// `REQUEST` lines too short to carry a URL. Line numbers are 1-based.
#[must_use]
pub fn validate_script(script: &str) -> ValidationResult {
    if script.trim().is_empty() {
        return ValidationResult::from_errors(vec!["Script is empty.".to_string()]);
    }

    let mut errors = Vec::new();
    if script.contains("undefined") {
        errors.push("Script contains \"undefined\" values.".to_string());
    }
    if script.contains("None") {
        errors.push("Script contains \"None\" values.".to_string());
    }

    let mut state = ScanState::Outside;
    for (number, line) in script.lines().enumerate().map(|(i, l)| (i + 1, l)) {
        state = state.next(line);

        if state == ScanState::Outside
            && !line.contains("CONTENT")
            && line.matches('"').count() % 2 != 0
        {
            errors.push(format!("Line {number}: Unmatched quotes"));
        }

        let trimmed = line.trim();
        if trimmed.starts_with("REQUEST") && trimmed.chars().count() < 10 {
            errors.push(format!("Line {number}: Empty or invalid REQUEST block"));
        }
    }

    if !errors.is_empty() {
        tracing::debug!(errors = errors.len(), "script failed validation");
    }
    ValidationResult::from_errors(errors)
}
