//! Method and callback signatures.

use crate::flow::{FlowFunction, FlowParam, FlowProp, FlowType};
use crate::model::{Identifier, Method, Returns};

use super::resolve::{resolve_param, resolve_type};
use super::state::GenerationState;

/// Return type of a method. Absent or empty returns mean `void`; several
/// returns form a union. Return values are never wrapped as optional.
pub fn return_type(returns: Option<&Returns>, state: &mut GenerationState) -> FlowType {
    let Some(returns) = returns else {
        return FlowType::Void;
    };
    let list = returns.as_slice();
    if list.is_empty() {
        return FlowType::Void;
    }
    FlowType::union_of(list.iter().map(|r| resolve_type(r, true, state)).collect())
}

/// Build the call variants for a parameter list.
///
/// The first variant takes every parameter. While the leading parameter is
/// optional and more than one remains, another variant is added without it.
/// Trailing optional parameters never cause extra variants.
pub fn overload_variants(
    params: &[Identifier],
    ret: &FlowType,
    state: &mut GenerationState,
) -> Vec<FlowFunction> {
    let resolved: Vec<FlowParam> = params.iter().map(|p| resolve_param(p, state)).collect();

    let mut variants = vec![FlowFunction::new(resolved.clone(), ret.clone())];
    let mut rest = resolved.as_slice();
    while rest.len() > 1 && rest[0].optional {
        rest = &rest[1..];
        variants.push(FlowFunction::new(rest.to_vec(), ret.clone()));
    }
    variants
}

/// A method as an object or class member.
pub fn method_member(method: &Method, state: &mut GenerationState) -> FlowProp {
    let ret = return_type(method.returns.as_ref(), state);
    let params = method.parameters.as_deref().unwrap_or_default();
    FlowProp::new(
        &method.name,
        FlowType::Method(overload_variants(params, &ret, state)),
    )
}

/// Listener callback for an event: its `returns` are the callback's parameters.
pub fn callback_type(params: &[Identifier], state: &mut GenerationState) -> FlowType {
    let params = params.iter().map(|p| resolve_param(p, state)).collect();
    FlowType::Function(FlowFunction::new(params, FlowType::Void))
}
