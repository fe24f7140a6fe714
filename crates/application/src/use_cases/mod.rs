//! Use cases
//!
//! Application-specific business logic orchestrating domain entities and ports.

mod export_script;
mod generate_script;

pub use export_script::{ExportScript, ExportScriptInput};
pub use generate_script::{GenerateScript, GenerateScriptInput, GenerateScriptOutput};
