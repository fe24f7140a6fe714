//! `PARSE` block builder.

use har2loli_domain::Extraction;

/// Builds the single-line `PARSE` block for an extraction.
///
/// Returns an empty string for unknown extraction kinds.
#[must_use]
pub fn build_parse_block(extraction: &Extraction) -> String {
    let Some(kind) = extraction.kind.token() else {
        return String::new();
    };
    format!(
        "PARSE \"<RESPONSE.BODY>\" {kind} \"{}\" -> VAR \"{}\" {}",
        extraction.pattern, extraction.variable_name, extraction.is_global
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use har2loli_domain::ExtractionKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_regex_extraction_global() {
        let extraction = Extraction::new(ExtractionKind::Regex, r"token=(\w+)", "token").global();
        assert_eq!(
            build_parse_block(&extraction),
            r#"PARSE "<RESPONSE.BODY>" REGEX "token=(\w+)" -> VAR "token" true"#
        );
    }

    #[test]
    fn test_regex_extraction_local() {
        let extraction = Extraction::new(ExtractionKind::Regex, "csrf=([^&]+)", "csrf_token");
        assert!(build_parse_block(&extraction).ends_with(r#"-> VAR "csrf_token" false"#));
    }

    #[test]
    fn test_kind_tokens() {
        let kind_of = |kind| {
            build_parse_block(&Extraction::new(kind, "p", "v"))
                .split_whitespace()
                .nth(2)
                .unwrap_or_default()
                .to_string()
        };
        assert_eq!(kind_of(ExtractionKind::Json), "JSON");
        assert_eq!(kind_of(ExtractionKind::Css), "CSS");
        assert_eq!(kind_of(ExtractionKind::Xpath), "XPATH");
    }

    #[test]
    fn test_css_pattern_kept_verbatim() {
        let extraction = Extraction::new(ExtractionKind::Css, r#"input[name="csrf"]"#, "csrf");
        assert!(build_parse_block(&extraction).contains(r#"CSS "input[name="csrf"]""#));
    }

    #[test]
    fn test_unknown_kind_is_empty() {
        let extraction = Extraction::new(ExtractionKind::Unknown, "p", "v");
        assert_eq!(build_parse_block(&extraction), "");
    }
}
