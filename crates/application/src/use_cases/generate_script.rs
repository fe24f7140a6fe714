//! Generate script use case.

use har2loli_domain::{
    Exchange, GenerateError, GeneratorConfig, OrderingStrategy, ValidationResult,
};

use crate::error::{ApplicationError, ApplicationResult};
use crate::lolicode::{generate_script, plan_for, validate_script};

/// Input for generating a script.
#[derive(Debug, Clone, Default)]
pub struct GenerateScriptInput {
    /// Captured exchanges, in capture order.
    pub exchanges: Vec<Exchange>,
    /// Selection and per-exchange overrides.
    pub config: GeneratorConfig,
    /// How the emission order is obtained.
    pub ordering: OrderingStrategy,
}

/// A generated script and its validation report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateScriptOutput {
    /// The LoliCode text.
    pub script: String,
    /// Advisory structural validation of `script`.
    pub validation: ValidationResult,
}

/// Use case for generating a LoliCode script.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateScript;

impl GenerateScript {
    /// Creates a new `GenerateScript` use case.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Resolves the ordering, generates the script and validates it.
    ///
    /// Generation runs on the blocking pool. A failed validation is logged
    /// but the script is still returned.
    ///
    /// # Errors
    /// Returns `ApplicationError::Generate` for configuration and ordering
    /// errors.
    pub async fn execute(&self, input: GenerateScriptInput) -> ApplicationResult<GenerateScriptOutput> {
        tokio::task::spawn_blocking(move || Self::run(&input))
            .await
            .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    fn run(input: &GenerateScriptInput) -> ApplicationResult<GenerateScriptOutput> {
        let plan = plan_for(&input.ordering, &input.exchanges, &input.config)
            .map_err(GenerateError::from)?;
        let script = generate_script(&input.config, &input.exchanges, &plan)?;
        let validation = validate_script(&script);

        if validation.is_valid {
            tracing::info!(
                exchanges = input.config.selected_indices.len(),
                "generated script"
            );
        } else {
            tracing::warn!(errors = ?validation.errors, "generated script failed validation");
        }

        Ok(GenerateScriptOutput { script, validation })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use har2loli_domain::{
        Extraction, ExtractionKind, OrderingError, OrderingPlan, Request, Response,
    };
    use pretty_assertions::assert_eq;

    fn exchanges() -> Vec<Exchange> {
        vec![
            Exchange::new(
                Request::get("https://example.com/me").with_header("authorization", "<token>"),
                Response::new(200),
            ),
            Exchange::new(Request::post("https://example.com/login"), Response::new(200)),
        ]
    }

    #[tokio::test]
    async fn test_dependency_ordering() {
        let input = GenerateScriptInput {
            exchanges: exchanges(),
            config: GeneratorConfig::selecting([0, 1]).with_extractions(
                1,
                vec![Extraction::new(ExtractionKind::Json, "$.token", "token")],
            ),
            ordering: OrderingStrategy::Dependencies,
        };

        let output = GenerateScript::new().execute(input).await.unwrap();

        assert!(output.validation.is_valid);
        let login = output.script.find("example.com/login").unwrap();
        let me = output.script.find("example.com/me").unwrap();
        assert!(login < me);
    }

    fn cyclic_pair() -> GenerateScriptInput {
        let exchanges = vec![
            Exchange::new(Request::get("https://example.com/home"), Response::new(200)),
            Exchange::new(Request::get("https://example.com/a?b=<b>"), Response::new(200)),
            Exchange::new(Request::get("https://example.com/b?a=<a>"), Response::new(200)),
        ];
        let config = GeneratorConfig::default()
            .with_extractions(1, vec![Extraction::new(ExtractionKind::Regex, "a=(\\w+)", "a")])
            .with_extractions(2, vec![Extraction::new(ExtractionKind::Regex, "b=(\\w+)", "b")]);
        GenerateScriptInput {
            exchanges,
            config,
            ordering: OrderingStrategy::Dependencies,
        }
    }

    #[tokio::test]
    async fn test_cycle_outside_selection_is_ignored() {
        let mut input = cyclic_pair();
        input.config.selected_indices = vec![0];

        let output = GenerateScript::new().execute(input).await.unwrap();

        assert!(output.script.contains("example.com/home"));
        assert!(!output.script.contains("example.com/a"));
    }

    #[tokio::test]
    async fn test_cycle_inside_selection_fails() {
        let mut input = cyclic_pair();
        input.config.selected_indices = vec![0, 1, 2];

        let err = GenerateScript::new().execute(input).await.unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Generate(GenerateError::Ordering(OrderingError::Cycle(ref stuck)))
                if stuck == &vec![1, 2]
        ));
    }

    #[tokio::test]
    async fn test_invalid_script_still_returned() {
        let input = GenerateScriptInput {
            exchanges: vec![Exchange::new(
                Request::get("https://example.com/undefined"),
                Response::new(200),
            )],
            config: GeneratorConfig::selecting([0]),
            ordering: OrderingStrategy::Capture,
        };

        let output = GenerateScript::new().execute(input).await.unwrap();

        assert!(!output.validation.is_valid);
        assert!(output.script.contains("REQUEST \"https://example.com/undefined\""));
    }

    #[tokio::test]
    async fn test_ordering_error_surfaces() {
        let input = GenerateScriptInput {
            exchanges: exchanges(),
            config: GeneratorConfig::selecting([0, 1]),
            ordering: OrderingStrategy::Explicit(OrderingPlan::new([1])),
        };

        let err = GenerateScript::new().execute(input).await.unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Generate(GenerateError::Ordering(OrderingError::MissingIndex(0)))
        ));
    }

    #[tokio::test]
    async fn test_empty_selection_yields_directives_only() {
        let input = GenerateScriptInput {
            exchanges: exchanges(),
            ..GenerateScriptInput::default()
        };

        let output = GenerateScript::new().execute(input).await.unwrap();

        assert_eq!(output.script.lines().count(), 4);
        assert!(output.validation.is_valid);
    }
}
