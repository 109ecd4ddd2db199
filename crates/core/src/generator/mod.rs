//! Libdef generation from an API description.
//!
//! - `state`: per-run known/referenced/hoisted bookkeeping
//! - `resolve`: identifier descriptors to Flow types
//! - `signature`: methods, overloads and callbacks
//! - `events`: `on`/`once` listener members
//! - `walkers`: structures, classes and elements
//! - `modules`: process-filtered module variables

mod events;
mod modules;
mod resolve;
mod signature;
mod state;
mod walkers;

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::GenerateError;
use crate::flow::{Declaration, Emit, Namespace};
use crate::format::Formatter;
use crate::model::ApiDescription;

pub use state::GenerationState;

/// Name of the module the libdef declares.
pub const MODULE_NAME: &str = "electron";

/// Electron process a libdef targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Process {
    /// The Node-side main process.
    Main,
    /// A browser-window renderer process.
    Renderer,
}

impl Process {
    /// Every process, in prompt order.
    pub const ALL: [Process; 2] = [Process::Main, Process::Renderer];

    /// Lowercase name, as used in flags and the libdef header.
    pub fn as_str(self) -> &'static str {
        match self {
            Process::Main => "main",
            Process::Renderer => "renderer",
        }
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Process {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Process::Main),
            "renderer" => Ok(Process::Renderer),
            other => Err(format!(
                "Unknown process '{other}', expected 'main' or 'renderer'"
            )),
        }
    }
}

/// Generates Flow libdefs for one API description.
///
/// The emitter holds no mutable state; every call starts a fresh
/// [`GenerationState`], so one instance can serve both processes.
#[derive(Debug, Clone, Copy)]
pub struct TypeEmitter<'a> {
    version: &'a str,
    api: &'a ApiDescription,
}

impl<'a> TypeEmitter<'a> {
    /// Emitter for `api`, labelled with release `version` in the header.
    pub fn new(version: &'a str, api: &'a ApiDescription) -> Self {
        Self { version, api }
    }

    /// The release label written into the header.
    pub fn version(&self) -> &str {
        self.version
    }

    /// Every declaration for `process`, in output order.
    pub fn declarations(&self, process: Process) -> Vec<Declaration> {
        let mut state = GenerationState::new();
        let mut declarations = Vec::new();

        for structure in self.api.structures() {
            declarations.push(walkers::structure_declaration(structure, &mut state));
        }
        declarations.extend(modules::module_declarations(self.api, process, &mut state));
        for element in self.api.elements() {
            declarations.push(walkers::element_declaration(element, &mut state));
        }
        for class in self.api.classes() {
            declarations.push(walkers::class_declaration(
                &class.name,
                &class.body,
                true,
                &mut state,
            ));
        }

        let walked = declarations.len();
        let hoisted = state.root_level().len();
        let trailing = state.into_trailing_declarations();
        debug!(
            %process,
            walked,
            hoisted,
            fallbacks = trailing.len() - hoisted,
            "Assembled declarations."
        );
        declarations.extend(trailing);
        declarations
    }

    /// Header plus the namespace block, before formatting.
    pub fn generate_raw(&self, process: Process) -> String {
        let namespace = Namespace {
            name: MODULE_NAME.to_string(),
            declarations: self.declarations(process),
        };
        format!("{}{}", header(self.version, process), namespace.emit())
    }

    /// Generate and format the complete libdef for `process`.
    pub fn generate(
        &self,
        process: Process,
        formatter: &dyn Formatter,
    ) -> Result<String, GenerateError> {
        let raw = self.generate_raw(process);
        Ok(formatter.format(&raw)?)
    }
}

/// Attribution carried by every generated libdef.
const ATTRIBUTION: &str =
    "Copyright (c) electron-flowgen contributors. Licensed under the MIT license.";

fn header(version: &str, process: Process) -> String {
    format!(
        "/**\n * {ATTRIBUTION}\n *\n * This is an autogenerated libdef for: electron-{version} {process} process\n *\n * @flow\n * @format\n */\n"
    )
}
