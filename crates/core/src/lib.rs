//! Flow libdef generation for Electron API descriptions.
//!
//! The pipeline is:
//! 1. Parse: electron-api.json -> [`ApiDescription`]
//! 2. Walk: [`ApiDescription`] -> Flow declarations, per [`Process`]
//! 3. Emit: declarations -> raw text (via the `Emit` trait)
//! 4. Format: raw text -> final libdef (via a [`Formatter`])

pub mod builtins;
pub mod error;
pub mod flow;
pub mod format;
pub mod generator;
pub mod model;

pub use error::{FormatError, GenerateError, Result};
pub use format::{FlowFormatter, FormatOptions, Formatter};
pub use generator::{Process, TypeEmitter};
pub use model::ApiDescription;

/// Parse `json` and produce the formatted libdef for `process`.
pub fn generate(version: &str, json: &str, process: Process) -> Result<String> {
    let api = ApiDescription::from_json(json)?;
    TypeEmitter::new(version, &api).generate(process, &FlowFormatter::default())
}
