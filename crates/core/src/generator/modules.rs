//! Module walker: each visible module becomes an exported variable.

use tracing::debug;

use crate::Process;
use crate::flow::{Declaration, FlowProp, FlowType};
use crate::model::{ApiDescription, Module};

use super::events::listener_members;
use super::resolve::resolve_property;
use super::signature::method_member;
use super::state::GenerationState;

/// Module that re-exposes every main-process module to the renderer.
const REMOTE_MODULE: &str = "remote";

/// Object shape of a module: methods, then event listeners, then properties.
fn module_shape(module: &Module, state: &mut GenerationState) -> Vec<FlowProp> {
    let mut members: Vec<FlowProp> = module
        .methods
        .iter()
        .flatten()
        .map(|m| method_member(m, state))
        .collect();
    if let Some(events) = &module.events {
        members.extend(listener_members(events, state));
    }
    members.extend(
        module
            .properties
            .iter()
            .flatten()
            .filter_map(|p| resolve_property(p, state)),
    );
    members
}

/// Declarations for every module visible in `process`, in document order.
pub fn module_declarations(
    api: &ApiDescription,
    process: Process,
    state: &mut GenerationState,
) -> Vec<Declaration> {
    let mut declarations = Vec::new();
    for module in api.modules() {
        if !module.is_visible_in(process) {
            debug!(module = %module.name, %process, "Module not visible, skipping.");
            continue;
        }

        let mut members = module_shape(module, state);
        if module.name == REMOTE_MODULE {
            members.extend(remote_members(api, state));
        }

        declarations.push(Declaration::Var {
            name: module.name.clone(),
            ty: FlowType::Object(members),
        });
    }
    declarations
}

/// Inline shapes of the main-process modules reachable through `remote`.
fn remote_members(api: &ApiDescription, state: &mut GenerationState) -> Vec<FlowProp> {
    api.modules()
        .filter(|m| m.name != REMOTE_MODULE && m.is_visible_in(Process::Main))
        .map(|m| FlowProp::new(&m.name, FlowType::Object(module_shape(m, state))))
        .collect()
}
