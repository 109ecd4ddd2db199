//! Flow code emission via the Emit trait.
//!
//! Each AST type implements `Emit`; emission is purely mechanical string
//! building. Layout is left to the formatter, so everything here is emitted
//! on as few lines as possible.

use super::types::{Declaration, FlowFunction, FlowParam, FlowProp, FlowType, Namespace};
use super::utils::{escape_single_quoted, param_name, property_key};

/// Trait for emitting Flow code from AST nodes.
pub trait Emit {
    /// Convert the AST node to its Flow string representation.
    fn emit(&self) -> String;
}

fn grouped(ty: &FlowType) -> String {
    if ty.needs_grouping() {
        format!("({})", ty.emit())
    } else {
        ty.emit()
    }
}

// =============================================================================
// Types
// =============================================================================

impl Emit for FlowType {
    fn emit(&self) -> String {
        match self {
            FlowType::Any => "any".to_string(),
            FlowType::Void => "void".to_string(),
            FlowType::Number => "number".to_string(),
            FlowType::Boolean => "boolean".to_string(),
            FlowType::String => "string".to_string(),
            FlowType::BooleanLiteral(b) => b.to_string(),
            FlowType::StringLiteral(s) => format!("'{}'", escape_single_quoted(s)),
            FlowType::Ref(name) | FlowType::Raw(name) => name.clone(),
            FlowType::Generic { name, args } => {
                let args = args.iter().map(Emit::emit).collect::<Vec<_>>().join(", ");
                format!("{name}<{args}>")
            }
            FlowType::Maybe(inner) => format!("?{}", grouped(inner)),
            FlowType::Union(types) => types
                .iter()
                .map(|t| match t {
                    FlowType::Function(_) | FlowType::Intersection(_) => grouped(t),
                    _ => t.emit(),
                })
                .collect::<Vec<_>>()
                .join(" | "),
            FlowType::Intersection(types) => types
                .iter()
                .map(grouped)
                .collect::<Vec<_>>()
                .join(" & "),
            FlowType::Object(props) => {
                if props.is_empty() {
                    "{}".to_string()
                } else {
                    let parts: Vec<_> = props.iter().map(Emit::emit).collect();
                    format!("{{ {} }}", parts.join(" "))
                }
            }
            FlowType::Function(func) => func.emit(),
            FlowType::Method(variants) => variants
                .iter()
                .map(|v| format!("({})", v.emit()))
                .collect::<Vec<_>>()
                .join(" | "),
        }
    }
}

impl Emit for FlowProp {
    fn emit(&self) -> String {
        let prefix = if self.is_static { "static " } else { "" };
        let opt = if self.optional { "?" } else { "" };
        format!("{prefix}{}{opt}: {},", property_key(&self.name), self.ty.emit())
    }
}

impl Emit for FlowParam {
    fn emit(&self) -> String {
        match &self.name {
            Some(name) => {
                let opt = if self.optional { "?" } else { "" };
                format!("{}{opt}: {}", param_name(name), self.ty.emit())
            }
            None => self.ty.emit(),
        }
    }
}

impl Emit for FlowFunction {
    fn emit(&self) -> String {
        let params = self
            .params
            .iter()
            .map(Emit::emit)
            .collect::<Vec<_>>()
            .join(", ");
        format!("({params}) => {}", self.ret.emit())
    }
}

// =============================================================================
// Declarations
// =============================================================================

fn emit_members(members: &[FlowProp]) -> String {
    if members.is_empty() {
        "{}".to_string()
    } else {
        let parts: Vec<_> = members.iter().map(Emit::emit).collect();
        format!("{{ {} }}", parts.join(" "))
    }
}

impl Emit for Declaration {
    fn emit(&self) -> String {
        match self {
            Declaration::TypeAlias { name, ty } => format!("declare type {name} = {}", ty.emit()),
            Declaration::Class {
                name,
                extends,
                exported,
                members,
            } => {
                let export = if *exported { "export " } else { "" };
                let extends = extends
                    .as_ref()
                    .map(|base| format!(" extends {base}"))
                    .unwrap_or_default();
                format!(
                    "declare {export}class {name}{extends} {}",
                    emit_members(members)
                )
            }
            Declaration::Var { name, ty } => format!("declare export var {name}: {}", ty.emit()),
            Declaration::Fallback(name) => format!("declare type {name} = any;"),
        }
    }
}

impl Emit for Namespace {
    fn emit(&self) -> String {
        let body = self
            .declarations
            .iter()
            .map(Emit::emit)
            .collect::<Vec<_>>()
            .join("\n");
        format!("declare module '{}' {{\n{body}\n}}\n", escape_single_quoted(&self.name))
    }
}

// =============================================================================
// Tests
// =============================================================================
