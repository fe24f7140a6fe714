//! LoliCode script engine.
//!
//! Turns captured exchanges plus a [`GeneratorConfig`](har2loli_domain::GeneratorConfig)
//! into LoliCode text. Each selected exchange yields a `REQUEST` block,
//! followed by its `KEYCHECK` blocks and then its `PARSE` blocks. Block
//! builders are pure functions; [`generate_script`] stitches them together
//! in the order produced by [`resolve_order`].

mod dependency;
mod generator;
mod keycheck_block;
mod order;
mod parse_block;
mod request_block;
mod validator;

pub use dependency::DependencyGraph;
pub use generator::{ScriptGenerator, generate_script, settings_directives};
pub use keycheck_block::{build_keycheck_block, build_status_check};
pub use order::{plan_for, resolve_order};
pub use parse_block::build_parse_block;
pub use request_block::{DEFAULT_USER_AGENT, build_request_block, escape_content};
pub use validator::validate_script;

/// Indentation for lines nested under a block keyword.
pub(crate) const INDENT: &str = "  ";
