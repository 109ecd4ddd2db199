//! Identifier resolution: description descriptors to Flow types.
//!
//! Resolution priority for a descriptor's base type:
//! 1. `Object` with nested properties → inline object shape
//! 2. `String` with possible values → union of string literals
//! 3. `Class` → `Class<Name>`, with the class hoisted to root level
//! 4. anything else → the descriptor's type tokens, joined as a union
//!
//! The base type is then wrapped in `Array<…>` for collections and `?…`
//! when not required.

use tracing::debug;

use crate::builtins;
use crate::flow::utils::needs_quoting;
use crate::flow::{Emit, FlowParam, FlowProp, FlowType};
use crate::model::{Identifier, TypeSpec, TypeToken};

use super::state::GenerationState;
use super::walkers::class_declaration;

/// Resolve a descriptor's full type fragment.
pub fn resolve_type(ident: &Identifier, required: bool, state: &mut GenerationState) -> FlowType {
    let base = resolve_base(ident, state);
    let ty = if ident.collection {
        FlowType::array(base)
    } else {
        base
    };
    if required { ty } else { FlowType::maybe(ty) }
}

/// Resolve a named descriptor as an object or class member.
///
/// Returns `None` for anonymous descriptors, which have no key to emit.
pub fn resolve_property(ident: &Identifier, state: &mut GenerationState) -> Option<FlowProp> {
    resolve_property_as(ident, ident.is_required(), state)
}

/// Like [`resolve_property`], but with requiredness decided by the caller.
pub fn resolve_property_as(
    ident: &Identifier,
    required: bool,
    state: &mut GenerationState,
) -> Option<FlowProp> {
    let Some(name) = ident.name.as_deref() else {
        debug!("Skipping anonymous identifier in property position.");
        return None;
    };
    let ty = resolve_type(ident, required, state);
    Some(FlowProp::new(name, ty).optional(!required))
}

/// Resolve a descriptor as a function parameter.
pub fn resolve_param(ident: &Identifier, state: &mut GenerationState) -> FlowParam {
    let required = ident.is_required();
    FlowParam {
        name: ident.name.clone(),
        ty: resolve_type(ident, required, state),
        optional: !required,
    }
}

fn resolve_base(ident: &Identifier, state: &mut GenerationState) -> FlowType {
    if ident.is_kind("Object") {
        let props = ident
            .properties
            .iter()
            .flatten()
            .filter_map(|p| resolve_property(p, state))
            .collect();
        return FlowType::Object(props);
    }

    if ident.is_kind("String")
        && let Some(values) = &ident.possible_values
    {
        return FlowType::union_of(
            values
                .iter()
                .map(|v| FlowType::StringLiteral(v.value.clone()))
                .collect(),
        );
    }

    if ident.is_kind("Class") {
        let Some(name) = ident.name.as_deref() else {
            return FlowType::Any;
        };
        hoist_class(name, ident, state);
        return FlowType::class_of(name);
    }

    let tokens = ident
        .type_spec
        .as_ref()
        .map(TypeSpec::tokens)
        .unwrap_or_default();
    FlowType::union_of(tokens.iter().map(|t| resolve_token(t, state)).collect())
}

fn hoist_class(name: &str, ident: &Identifier, state: &mut GenerationState) {
    if !state.claim_hoisted(name) {
        return;
    }
    debug!(class = name, "Hoisting inline class declaration to root level.");
    let declaration = class_declaration(name, &ident.class_body, false, state);
    state.push_root_level(declaration);
}

fn resolve_token(token: &TypeToken, state: &mut GenerationState) -> FlowType {
    match token {
        TypeToken::Name(name) => resolve_name(name, state),
        TypeToken::Info(info) => {
            let inner = resolve_name(&info.type_name, state);
            if info.collection {
                FlowType::array(inner)
            } else {
                inner
            }
        }
    }
}

/// Resolve a single type name against the builtin registry, recording it as
/// a reference when it may need a fallback declaration.
pub fn resolve_name(name: &str, state: &mut GenerationState) -> FlowType {
    if let Some(ty) = builtins::alias(name) {
        return ty;
    }
    if builtins::is_ambient(name) {
        return FlowType::Ref(name.to_string());
    }
    if builtins::is_string_literal(name) || builtins::is_arrow_signature(name) {
        return FlowType::Raw(name.to_string());
    }
    if needs_quoting(name) {
        return resolve_free_form(name, state);
    }
    state.record_reference(name);
    FlowType::Ref(name.to_string())
}

/// Pass a free-form type expression (`Array<Rectangle>`, `Rectangle[]`)
/// through as raw text.
///
/// The text itself never gets a `declare type`, since that would not parse.
/// Instead every bare name inside it is handled like a single token: aliases
/// with a plain spelling are rewritten in place and other unknown names are
/// recorded so they receive a fallback. Object keys, parameter names, member
/// accesses and quoted literals are left alone.
fn resolve_free_form(text: &str, state: &mut GenerationState) -> FlowType {
    debug!(token = text, "Passing through free-form type expression.");
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut quote = None;

    while let Some(c) = rest.chars().next() {
        if let Some(open) = quote {
            if c == open {
                quote = None;
            }
        } else if c == '\'' || c == '"' {
            quote = Some(c);
        } else if is_word_start(c) {
            let end = rest.find(|c: char| !is_word_char(c)).unwrap_or(rest.len());
            let (word, tail) = rest.split_at(end);
            let resolved = resolve_word(word, &out, tail, state);
            out.push_str(&resolved);
            rest = tail;
            continue;
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    FlowType::Raw(out)
}

/// One bare name inside free-form text. `before` is the text emitted so far
/// and `after` the remaining input.
fn resolve_word(word: &str, before: &str, after: &str, state: &mut GenerationState) -> String {
    let after = after.trim_start();
    let is_key = after.starts_with(':') || after.starts_with("?:");
    let is_member = before.ends_with('.');
    if is_key || is_member || builtins::is_flow_keyword(word) || builtins::is_ambient(word) {
        return word.to_string();
    }
    match builtins::alias(word) {
        // Generic aliases (`Promise`, `Array`) keep their name so explicit
        // type arguments still apply.
        Some(FlowType::Generic { .. }) => word.to_string(),
        Some(ty) => ty.emit(),
        None => {
            state.record_reference(word);
            word.to_string()
        }
    }
}

fn is_word_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}
