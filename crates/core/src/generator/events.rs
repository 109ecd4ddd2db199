//! Event listener registration members (`on`, `once`).

use crate::flow::{FlowFunction, FlowParam, FlowProp, FlowType};
use crate::model::Event;

use super::signature::callback_type;
use super::state::GenerationState;

/// Listener registration methods emitted for every evented owner.
pub const LISTENER_METHODS: &[&str] = &["on", "once"];

/// `((eventName: 'name', callback: (...) => void) => void)` for one event.
fn listener_shape(event: &Event, state: &mut GenerationState) -> FlowType {
    let params = event.returns.as_deref().unwrap_or_default();
    let signature = FlowFunction::new(
        vec![
            FlowParam::named("eventName", FlowType::StringLiteral(event.name.clone())),
            FlowParam::named("callback", callback_type(params, state)),
        ],
        FlowType::Void,
    );
    FlowType::Method(vec![signature])
}

/// Members for an owner's events: one per listener method, each the
/// intersection of every event's shape. No events means no members.
pub fn listener_members(events: &[Event], state: &mut GenerationState) -> Vec<FlowProp> {
    if events.is_empty() {
        return Vec::new();
    }

    let mut shapes: Vec<FlowType> = events.iter().map(|e| listener_shape(e, state)).collect();
    let combined = if shapes.len() == 1 {
        shapes.remove(0)
    } else {
        FlowType::Intersection(shapes)
    };

    LISTENER_METHODS
        .iter()
        .map(|method| FlowProp::new(*method, combined.clone()))
        .collect()
}
