//! Per-run bookkeeping threaded through every walker.
//!
//! A fresh `GenerationState` is created for each generation run, so one
//! `TypeEmitter` can be reused across documents and processes.

use std::collections::BTreeSet;

use tracing::debug;

use crate::flow::Declaration;

/// Known, referenced and hoisted names for one generation run.
#[derive(Debug, Default)]
pub struct GenerationState {
    /// Names that received a top-level declaration during this run.
    known: BTreeSet<String>,
    /// Names referenced from a type position that are not builtins.
    referenced: BTreeSet<String>,
    /// Class declarations discovered while resolving identifiers.
    root_level: Vec<Declaration>,
    /// Names already claimed for a root-level class declaration.
    hoisted: BTreeSet<String>,
}

impl GenerationState {
    /// Empty state for a new run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `name` has its own top-level type declaration.
    pub fn mark_known(&mut self, name: &str) {
        self.known.insert(name.to_string());
    }

    /// Whether `name` was declared by a walker during this run.
    pub fn is_known(&self, name: &str) -> bool {
        self.known.contains(name)
    }

    /// Record a name used in a type position that may need a fallback.
    pub fn record_reference(&mut self, name: &str) {
        self.referenced.insert(name.to_string());
    }

    /// Claim `name` for a root-level class declaration.
    ///
    /// Returns false if it was already claimed, in which case the caller
    /// must not walk or push the declaration again.
    pub fn claim_hoisted(&mut self, name: &str) -> bool {
        self.hoisted.insert(name.to_string())
    }

    /// Queue a hoisted declaration for the end of the namespace.
    pub fn push_root_level(&mut self, declaration: Declaration) {
        self.root_level.push(declaration);
    }

    /// Hoisted declarations collected so far.
    pub fn root_level(&self) -> &[Declaration] {
        &self.root_level
    }

    /// Referenced names that never received a declaration, in sorted order.
    pub fn unresolved(&self) -> impl Iterator<Item = &str> {
        self.referenced
            .iter()
            .filter(|name| !self.known.contains(*name))
            .map(String::as_str)
    }

    /// Finish the run: root-level declarations followed by one fallback per
    /// unresolved name.
    pub fn into_trailing_declarations(self) -> Vec<Declaration> {
        let fallbacks: Vec<Declaration> = self
            .unresolved()
            .map(|name| {
                debug!(type_name = name, "No declaration found, emitting fallback.");
                Declaration::Fallback(name.to_string())
            })
            .collect();
        let mut declarations = self.root_level;
        declarations.extend(fallbacks);
        declarations
    }
}
