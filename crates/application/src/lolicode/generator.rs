//! Script assembly.

use std::collections::HashSet;

use har2loli_domain::{
    ConfigurationError, Exchange, GenerateResult, GeneratorConfig, OrderingError, OrderingPlan,
    ScriptSettings,
};

use super::keycheck_block::{build_keycheck_block, build_status_check};
use super::order::resolve_order;
use super::parse_block::build_parse_block;
use super::request_block::build_request_block;

/// Generate a LoliCode script for the selected exchanges.
///
/// # Errors
///
/// Returns a configuration error for out-of-range or duplicate indices, and
/// an ordering error when the plan does not cover the selection.
pub fn generate_script(
    config: &GeneratorConfig,
    exchanges: &[Exchange],
    plan: &OrderingPlan,
) -> GenerateResult<String> {
    ScriptGenerator::new(config).generate(exchanges, plan)
}

/// Assembles scripts from captured exchanges and a configuration.
///
/// Holds no state between calls; one generator may be shared freely.
pub struct ScriptGenerator<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> ScriptGenerator<'a> {
    /// Create a new generator over the given configuration.
    #[must_use]
    pub const fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generate the script.
    ///
    /// The settings directives come first, followed by one section per
    /// exchange in resolved order. Blocks and sections are separated by a
    /// blank line.
    ///
    /// # Errors
    ///
    /// See [`generate_script`].
    pub fn generate(&self, exchanges: &[Exchange], plan: &OrderingPlan) -> GenerateResult<String> {
        check_indices(self.config, plan, exchanges.len())?;
        let order = resolve_order(&self.config.selected_indices, plan, exchanges.len())?;

        let mut sections = Vec::with_capacity(order.len() + 1);
        sections.push(settings_directives(&self.config.settings));

        for index in order {
            let exchange = exchanges.get(index).ok_or(OrderingError::IndexOutOfRange {
                index,
                len: exchanges.len(),
            })?;
            sections.push(self.exchange_section(index, exchange));
        }

        tracing::debug!(sections = sections.len(), "assembled script");
        Ok(sections.join("\n\n"))
    }

    fn exchange_section(&self, index: usize, exchange: &Exchange) -> String {
        let mut blocks = vec![build_request_block(
            &exchange.request,
            self.config.custom_headers.get(index),
        )];

        match self.config.assertions.get(index) {
            Some(assertions) => blocks.extend(assertions.iter().map(build_keycheck_block)),
            None => blocks.push(build_status_check(exchange.response.status)),
        }

        if let Some(extractions) = self.config.extractions.get(index) {
            blocks.extend(extractions.iter().map(build_parse_block));
        }

        let before = blocks.len();
        blocks.retain(|block| !block.is_empty());
        if blocks.len() < before {
            tracing::debug!(index, omitted = before - blocks.len(), "omitted blocks of unknown kind");
        }

        blocks.join("\n\n")
    }
}

/// Renders the global settings as directive lines.
#[must_use]
pub fn settings_directives(settings: &ScriptSettings) -> String {
    let flag = |value: bool| if value { "TRUE" } else { "FALSE" };
    [
        format!("SET USEPROXY {}", flag(settings.use_proxy)),
        format!("SET FOLLOWREDIRECTS {}", flag(settings.follow_redirects)),
        format!("SET TIMEOUT {}", settings.timeout_seconds),
        format!("SET RETRYCOUNT {}", settings.retry_count),
    ]
    .join("\n")
}

fn check_indices(
    config: &GeneratorConfig,
    plan: &OrderingPlan,
    len: usize,
) -> Result<(), ConfigurationError> {
    in_range("selected_indices", config.selected_indices.iter().copied(), len)?;
    in_range("custom_headers", config.custom_headers.indices(), len)?;
    in_range("assertions", config.assertions.indices(), len)?;
    in_range("extractions", config.extractions.indices(), len)?;
    in_range("topological_order", plan.topological_order.iter().copied(), len)?;

    let mut seen = HashSet::new();
    if let Some(&index) = config.selected_indices.iter().find(|&&i| !seen.insert(i)) {
        return Err(ConfigurationError::DuplicateSelection(index));
    }

    Ok(())
}

fn in_range(
    field: &'static str,
    mut indices: impl Iterator<Item = usize>,
    len: usize,
) -> Result<(), ConfigurationError> {
    indices.find(|&index| index >= len).map_or(Ok(()), |index| {
        Err(ConfigurationError::IndexOutOfRange { field, index, len })
    })
}
