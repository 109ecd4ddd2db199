//! Structure, class and element walkers.
//!
//! Each walker turns one description entry into a top-level declaration and
//! marks its name as known so it never receives a fallback.

use crate::flow::{Declaration, FlowProp, FlowType};
use crate::model::{ClassBody, Element, Structure};

use super::events::listener_members;
use super::resolve::{resolve_property, resolve_property_as};
use super::signature::{method_member, overload_variants};
use super::state::GenerationState;

/// Base class for every custom element.
const ELEMENT_BASE: &str = "HTMLElement";

pub fn structure_declaration(structure: &Structure, state: &mut GenerationState) -> Declaration {
    state.mark_known(&structure.name);
    let props = structure
        .properties
        .iter()
        .filter_map(|p| resolve_property(p, state))
        .collect();
    Declaration::TypeAlias {
        name: structure.name.clone(),
        ty: FlowType::Object(props),
    }
}

/// Walk a class body into a class declaration.
///
/// Members are emitted in a fixed order: constructor, static methods,
/// instance methods, static properties, instance properties, then event
/// listeners. Class properties are always emitted as required.
pub fn class_declaration(
    name: &str,
    body: &ClassBody,
    exported: bool,
    state: &mut GenerationState,
) -> Declaration {
    state.mark_known(name);
    let mut members = Vec::new();

    if let Some(constructor) = &body.constructor_method {
        let params = constructor.parameters.as_deref().unwrap_or_default();
        let variants = overload_variants(params, &FlowType::Ref(name.to_string()), state);
        members.push(FlowProp::new("constructor", FlowType::Method(variants)));
    }

    for method in body.static_methods.iter().flatten() {
        members.push(method_member(method, state).with_static());
    }
    for method in body.instance_methods.iter().flatten() {
        members.push(method_member(method, state));
    }

    for prop in body.static_properties.iter().flatten() {
        if let Some(member) = resolve_property_as(prop, true, state) {
            members.push(member.with_static());
        }
    }
    for prop in body.instance_properties.iter().flatten() {
        members.extend(resolve_property_as(prop, true, state));
    }

    if let Some(events) = &body.instance_events {
        members.extend(listener_members(events, state));
    }

    Declaration::Class {
        name: name.to_string(),
        extends: None,
        exported,
        members,
    }
}

pub fn element_declaration(element: &Element, state: &mut GenerationState) -> Declaration {
    state.mark_known(&element.name);
    let mut members: Vec<FlowProp> = element
        .methods
        .iter()
        .flatten()
        .map(|m| method_member(m, state))
        .collect();
    if let Some(events) = &element.dom_events {
        members.extend(listener_members(events, state));
    }

    Declaration::Class {
        name: element.name.clone(),
        extends: Some(ELEMENT_BASE.to_string()),
        exported: true,
        members,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::flow::Emit;
    use crate::model::Class;

    #[test]
    fn test_structure() {
        let structure: Structure = serde_json::from_str(
            r#"{ "name": "Foo", "properties": [{ "name": "bar", "type": "String", "required": true }] }"#,
        )
        .unwrap();
        let mut state = GenerationState::new();
        let decl = structure_declaration(&structure, &mut state);
        assert_eq!(decl.emit(), "declare type Foo = { bar: string, }");
        assert!(state.is_known("Foo"));
    }

    #[test]
    fn test_structure_without_properties() {
        let structure: Structure = serde_json::from_str(r#"{ "name": "Empty" }"#).unwrap();
        let mut state = GenerationState::new();
        assert_eq!(
            structure_declaration(&structure, &mut state).emit(),
            "declare type Empty = {}"
        );
    }

    #[test]
    fn test_class_member_order() {
        let class: Class = serde_json::from_str(
            r#"{
              "name": "Tray",
              "constructorMethod": { "parameters": [
                { "name": "image", "type": ["NativeImage", "String"], "required": true }
              ] },
              "staticMethods": [{ "name": "create" }],
              "instanceMethods": [{ "name": "destroy" }],
              "staticProperties": [{ "name": "count", "type": "Integer" }],
              "instanceProperties": [{ "name": "id", "type": "Integer", "required": false }],
              "instanceEvents": [{ "name": "click" }]
            }"#,
        )
        .unwrap();
        let mut state = GenerationState::new();
        let decl = class_declaration(&class.name, &class.body, true, &mut state);
        let Declaration::Class { members, .. } = &decl else {
            panic!("expected class declaration");
        };
        let emitted: Vec<_> = members.iter().map(Emit::emit).collect();
        assert_eq!(
            emitted,
            vec![
                "constructor: ((image: NativeImage | string) => Tray),",
                "static create: (() => void),",
                "destroy: (() => void),",
                "static count: number,",
                "id: number,",
                "on: ((eventName: 'click', callback: () => void) => void),",
                "once: ((eventName: 'click', callback: () => void) => void),",
            ]
        );
        assert!(decl.emit().starts_with("declare export class Tray {"));
        assert!(state.is_known("Tray"));
        assert_eq!(state.unresolved().collect::<Vec<_>>(), vec!["NativeImage"]);
    }

    #[test]
    fn test_empty_class() {
        let class: Class = serde_json::from_str(r#"{ "name": "Nothing" }"#).unwrap();
        let mut state = GenerationState::new();
        assert_eq!(
            class_declaration(&class.name, &class.body, true, &mut state).emit(),
            "declare export class Nothing {}"
        );
    }

    #[test]
    fn test_element_extends_html_element() {
        let element: Element = serde_json::from_str(
            r#"{ "name": "WebviewTag",
                 "methods": [{ "name": "reload" }],
                 "domEvents": [{ "name": "did-finish-load" }] }"#,
        )
        .unwrap();
        let mut state = GenerationState::new();
        let decl = element_declaration(&element, &mut state);
        assert_eq!(
            decl.emit(),
            "declare export class WebviewTag extends HTMLElement { reload: (() => void), \
             on: ((eventName: 'did-finish-load', callback: () => void) => void), \
             once: ((eventName: 'did-finish-load', callback: () => void) => void), }"
        );
    }
}
