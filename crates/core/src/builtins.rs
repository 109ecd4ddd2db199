//! Closed registry of type names the emitter recognizes without a declaration.
//!
//! Two tables live here:
//! - aliases: description-level names rewritten to a Flow type (`Integer` → `number`)
//! - ambient names: JS, Node and DOM globals Flow already knows; they pass
//!   through unchanged and are never treated as unknown
//!
//! Anything else that is not a free-form literal or arrow signature must be
//! declared in the document or receives a fallback declaration.

use crate::flow::FlowType;

/// Resolve a description-level alias to its Flow type.
pub fn alias(name: &str) -> Option<FlowType> {
    let ty = match name {
        "Number" | "Integer" | "Double" | "Float" => FlowType::Number,
        "Boolean" => FlowType::Boolean,
        "String" => FlowType::String,
        "Promise" => FlowType::generic("Promise", vec![FlowType::Any]),
        "Array" => FlowType::array(FlowType::Any),
        "true" => FlowType::BooleanLiteral(true),
        "false" => FlowType::BooleanLiteral(false),
        "Event" => FlowType::Ref("Event".to_string()),
        "any" => FlowType::Any,
        _ => return None,
    };
    Some(ty)
}

/// Globals that every Flow environment targeting Electron already declares.
pub const AMBIENT_TYPES: &[&str] = &[
    // ECMAScript
    "Object",
    "Function",
    "Symbol",
    "Date",
    "Error",
    "RegExp",
    "Map",
    "Set",
    "WeakMap",
    "WeakSet",
    "ArrayBuffer",
    "SharedArrayBuffer",
    "DataView",
    "Int8Array",
    "Uint8Array",
    "Uint8ClampedArray",
    "Int16Array",
    "Uint16Array",
    "Int32Array",
    "Uint32Array",
    "Float32Array",
    "Float64Array",
    "JSON",
    "Math",
    "Iterator",
    "Iterable",
    // Node
    "Buffer",
    "URL",
    "URLSearchParams",
    // DOM
    "Blob",
    "File",
    "FileList",
    "FormData",
    "Headers",
    "Request",
    "Response",
    "ReadableStream",
    "Element",
    "HTMLElement",
    "HTMLCanvasElement",
    "HTMLImageElement",
    "ImageData",
    "KeyboardEvent",
    "MouseEvent",
    "InputEvent",
    "MessagePort",
    "MediaStream",
    "Document",
    "Window",
    "Worker",
];

/// Whether `name` is one of the ambient globals above.
pub fn is_ambient(name: &str) -> bool {
    AMBIENT_TYPES.contains(&name)
}

/// Words of the Flow type language itself, plus `$`-prefixed utility types.
pub fn is_flow_keyword(word: &str) -> bool {
    word.starts_with('$')
        || matches!(
            word,
            "any"
                | "mixed"
                | "empty"
                | "void"
                | "null"
                | "undefined"
                | "string"
                | "number"
                | "boolean"
                | "bigint"
                | "symbol"
                | "true"
                | "false"
                | "typeof"
                | "Class"
        )
}

/// `'\S+'`: a pre-rendered string literal type.
pub fn is_string_literal(token: &str) -> bool {
    token.len() >= 3
        && token.starts_with('\'')
        && token.ends_with('\'')
        && !token[1..token.len() - 1].contains(char::is_whitespace)
}

/// `(<params without ')'>) => \S+`: a pre-rendered single-expression arrow signature.
pub fn is_arrow_signature(token: &str) -> bool {
    let Some(rest) = token.strip_prefix('(') else {
        return false;
    };
    let Some(close) = rest.find(')') else {
        return false;
    };
    let Some(ret) = rest[close + 1..].strip_prefix(" => ") else {
        return false;
    };
    !ret.is_empty() && !ret.contains(char::is_whitespace)
}
