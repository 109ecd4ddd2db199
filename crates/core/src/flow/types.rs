//! Flow type AST for libdef generation.
//!
//! This module defines the Flow declaration-language representation:
//! - FlowType: type expressions (primitives, unions, objects, functions, ...)
//! - FlowProp / FlowParam / FlowFunction: members and call shapes
//! - Declaration / Namespace: top-level items and the module wrapper

/// Flow type expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowType {
    /// `any`
    Any,
    /// `void`
    Void,
    /// `number`
    Number,
    /// `boolean`
    Boolean,
    /// `string`
    String,
    /// Boolean literal type: `true`, `false`
    BooleanLiteral(bool),
    /// String literal type: `'ready'`
    StringLiteral(String),
    /// Named type reference: `Rectangle`, `Event`
    Ref(String),
    /// Generic application: `Array<T>`, `Class<T>`, `Promise<any>`
    Generic {
        /// Generic type constructor.
        name: String,
        /// Type arguments, in order.
        args: Vec<FlowType>,
    },
    /// Maybe type: `?T`
    Maybe(Box<FlowType>),
    /// Union: `A | B`
    Union(Vec<FlowType>),
    /// Intersection: `A & B`
    Intersection(Vec<FlowType>),
    /// Inline object shape: `{ a: string, }`
    Object(Vec<FlowProp>),
    /// Function type: `(a: string) => void`
    Function(FlowFunction),
    /// Method overloads, each variant parenthesized: `(() => void) | ((a: T) => void)`
    Method(Vec<FlowFunction>),
    /// Free-form fragment copied verbatim from the description
    Raw(String),
}

impl FlowType {
    /// `name<args>`
    pub fn generic(name: &str, args: Vec<FlowType>) -> Self {
        FlowType::Generic {
            name: name.to_string(),
            args,
        }
    }

    /// `Array<inner>`
    pub fn array(inner: FlowType) -> Self {
        Self::generic("Array", vec![inner])
    }

    /// `Class<name>`
    pub fn class_of(name: &str) -> Self {
        Self::generic("Class", vec![FlowType::Ref(name.to_string())])
    }

    /// `?inner`
    pub fn maybe(inner: FlowType) -> Self {
        FlowType::Maybe(Box::new(inner))
    }

    /// Collapse a list of alternatives: none → `any`, one → itself, many → union.
    pub fn union_of(mut types: Vec<FlowType>) -> Self {
        match types.len() {
            0 => FlowType::Any,
            1 => types.remove(0),
            _ => FlowType::Union(types),
        }
    }

    /// Whether this type needs parentheses when nested inside a prefix or
    /// binary type operator.
    pub fn needs_grouping(&self) -> bool {
        match self {
            FlowType::Union(_) | FlowType::Intersection(_) | FlowType::Function(_) => true,
            FlowType::Method(variants) => variants.len() > 1,
            _ => false,
        }
    }
}

/// Object or class member: `[static ]name[?]: T,`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowProp {
    /// Member name, quoted on emission when needed.
    pub name: String,
    /// Member type.
    pub ty: FlowType,
    /// Emits `name?:`.
    pub optional: bool,
    /// Emits a `static` prefix.
    pub is_static: bool,
}

impl FlowProp {
    /// Required instance member.
    pub fn new(name: impl Into<String>, ty: FlowType) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
            is_static: false,
        }
    }

    /// Set whether the member is optional.
    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Mark the member static.
    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }
}

/// Function parameter. Anonymous parameters emit only their type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowParam {
    /// Parameter name; rewritten into an identifier on emission.
    pub name: Option<String>,
    /// Parameter type.
    pub ty: FlowType,
    /// Emits `name?:`.
    pub optional: bool,
}

impl FlowParam {
    /// Required parameter called `name`.
    pub fn named(name: impl Into<String>, ty: FlowType) -> Self {
        Self {
            name: Some(name.into()),
            ty,
            optional: false,
        }
    }
}

/// Call shape: `(params) => ret`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowFunction {
    /// Parameters, in order.
    pub params: Vec<FlowParam>,
    /// Return type.
    pub ret: Box<FlowType>,
}

impl FlowFunction {
    /// `(params) => ret`
    pub fn new(params: Vec<FlowParam>, ret: FlowType) -> Self {
        Self {
            params,
            ret: Box::new(ret),
        }
    }
}

// =============================================================================
// Declarations
// =============================================================================

/// Top-level declaration inside the namespace wrapper
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// `declare type Name = T`
    TypeAlias {
        /// Alias name.
        name: String,
        /// Aliased type.
        ty: FlowType,
    },
    /// `declare [export ]class Name[ extends Base] { ... }`
    Class {
        /// Class name.
        name: String,
        /// Base class, if any.
        extends: Option<String>,
        /// Emits `declare export class` instead of `declare class`.
        exported: bool,
        /// Members, in emission order.
        members: Vec<FlowProp>,
    },
    /// `declare export var name: T`
    Var {
        /// Variable name.
        name: String,
        /// Variable type.
        ty: FlowType,
    },
    /// `declare type Name = any;`
    Fallback(String),
}

impl Declaration {
    /// The declared name.
    pub fn name(&self) -> &str {
        match self {
            Declaration::TypeAlias { name, .. }
            | Declaration::Class { name, .. }
            | Declaration::Var { name, .. }
            | Declaration::Fallback(name) => name,
        }
    }
}

/// `declare module 'name' { ... }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    /// Module name, emitted quoted.
    pub name: String,
    /// Declarations inside the module block.
    pub declarations: Vec<Declaration>,
}
