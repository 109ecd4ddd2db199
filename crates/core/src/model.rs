//! API-description document structs for serde deserialization.
//!
//! This module defines the subset of the electron-api.json shape that the
//! emitter reads. Fields the emitter never looks at (descriptions, website
//! URLs, platform notes) are ignored by serde.

use serde::Deserialize;

use crate::error::GenerateError;

/// Root document: an ordered list of API entries.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ApiDescription {
    /// Entries in document order.
    pub entries: Vec<ApiEntry>,
}

impl ApiDescription {
    /// Parse an API description from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, GenerateError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Structure entries, in document order.
    pub fn structures(&self) -> impl Iterator<Item = &Structure> {
        self.entries.iter().filter_map(|e| match e {
            ApiEntry::Structure(s) => Some(s),
            _ => None,
        })
    }

    /// Module entries, in document order.
    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.entries.iter().filter_map(|e| match e {
            ApiEntry::Module(m) => Some(m),
            _ => None,
        })
    }

    /// Element entries, in document order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.entries.iter().filter_map(|e| match e {
            ApiEntry::Element(el) => Some(el),
            _ => None,
        })
    }

    /// Class entries, in document order.
    pub fn classes(&self) -> impl Iterator<Item = &Class> {
        self.entries.iter().filter_map(|e| match e {
            ApiEntry::Class(c) => Some(c),
            _ => None,
        })
    }
}

/// One top-level entry, discriminated by its `type` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum ApiEntry {
    /// `"type": "Structure"`
    Structure(Structure),
    /// `"type": "Class"`
    Class(Class),
    /// `"type": "Element"`
    Element(Element),
    /// `"type": "Module"`
    Module(Module),
    /// Any discriminator this generator does not know about.
    #[serde(other)]
    Unknown,
}

/// A plain data shape: named fields, no methods.
#[derive(Debug, Clone, Deserialize)]
pub struct Structure {
    /// Type name.
    pub name: String,
    /// Fields, in order.
    #[serde(default)]
    pub properties: Vec<Identifier>,
}

/// Members shared by class entries and class-kind identifiers.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassBody {
    /// `new` signature.
    pub constructor_method: Option<Constructor>,
    /// Methods on the class itself.
    pub static_methods: Option<Vec<Method>>,
    /// Methods on instances.
    pub instance_methods: Option<Vec<Method>>,
    /// Properties on the class itself.
    pub static_properties: Option<Vec<Identifier>>,
    /// Properties on instances.
    pub instance_properties: Option<Vec<Identifier>>,
    /// Events emitted by instances.
    pub instance_events: Option<Vec<Event>>,
}

/// A top-level class.
#[derive(Debug, Clone, Deserialize)]
pub struct Class {
    /// Class name.
    pub name: String,
    /// Members.
    #[serde(flatten)]
    pub body: ClassBody,
}

/// Constructor descriptor. Its return type is always the owning class.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Constructor {
    /// Constructor parameters, in order.
    pub parameters: Option<Vec<Identifier>>,
}

/// A custom UI element; always extends `HTMLElement`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Class name.
    pub name: String,
    /// Methods on the element.
    pub methods: Option<Vec<Method>>,
    /// DOM events the element dispatches.
    pub dom_events: Option<Vec<Event>>,
}

/// A singleton module object such as `app` or `ipcRenderer`.
#[derive(Debug, Clone, Deserialize)]
pub struct Module {
    /// Exported variable name.
    pub name: String,
    /// Functions on the module.
    pub methods: Option<Vec<Method>>,
    /// Values on the module.
    pub properties: Option<Vec<Identifier>>,
    /// Events the module emits.
    pub events: Option<Vec<Event>>,
    /// Per-process visibility. Absent means visible everywhere.
    pub process: Option<ProcessVisibility>,
}

impl Module {
    /// Whether this module belongs in the libdef for `process`.
    pub fn is_visible_in(&self, process: crate::Process) -> bool {
        self.process.is_none_or(|visibility| visibility.allows(process))
    }
}

/// Which processes can load a module.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ProcessVisibility {
    /// Available in the main process.
    #[serde(default)]
    pub main: bool,
    /// Available in renderer processes.
    #[serde(default)]
    pub renderer: bool,
}

impl ProcessVisibility {
    /// Whether `process` can load the module.
    pub fn allows(self, process: crate::Process) -> bool {
        match process {
            crate::Process::Main => self.main,
            crate::Process::Renderer => self.renderer,
        }
    }
}

/// A callable member.
#[derive(Debug, Clone, Deserialize)]
pub struct Method {
    /// Member name.
    pub name: String,
    /// Parameters, in order.
    pub parameters: Option<Vec<Identifier>>,
    /// Return descriptor; absent means `void`.
    pub returns: Option<Returns>,
}

/// Return descriptor: a single identifier or several, treated as a union.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Returns {
    /// A single return value.
    One(Box<Identifier>),
    /// Alternative return values.
    Many(Vec<Identifier>),
}

impl Returns {
    /// Every return descriptor, single or not.
    pub fn as_slice(&self) -> &[Identifier] {
        match self {
            Returns::One(one) => std::slice::from_ref(one.as_ref()),
            Returns::Many(many) => many,
        }
    }
}

/// An event; `returns` lists the listener callback's parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    /// Event name passed to `on`/`once`.
    pub name: String,
    /// Listener callback parameters.
    pub returns: Option<Vec<Identifier>>,
}

/// A typed field, parameter, return value or property.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    /// Field or parameter name; absent for return values.
    pub name: Option<String>,
    /// The `type` field.
    #[serde(rename = "type")]
    pub type_spec: Option<TypeSpec>,
    /// Absent means optional.
    pub required: Option<bool>,
    /// The value is an array of the type.
    #[serde(default)]
    pub collection: bool,
    /// Nested fields for `Object` identifiers.
    pub properties: Option<Vec<Identifier>>,
    /// Allowed literal values for `String` identifiers.
    pub possible_values: Option<Vec<PossibleValue>>,
    /// Class members for `Class` identifiers.
    #[serde(flatten)]
    pub class_body: ClassBody,
}

impl Identifier {
    /// `required`, defaulting to false.
    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }

    /// True when the descriptor's type is exactly the single name `kind`.
    pub fn is_kind(&self, kind: &str) -> bool {
        matches!(&self.type_spec, Some(TypeSpec::Name(name)) if name == kind)
    }
}

/// One allowed value of a string enum.
#[derive(Debug, Clone, Deserialize)]
pub struct PossibleValue {
    /// The literal string.
    pub value: String,
}

/// The `type` field of an identifier.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TypeSpec {
    /// A single type name or free-form expression.
    Name(String),
    /// Alternatives; `null` entries are skipped.
    List(Vec<Option<TypeToken>>),
    /// A single structured token.
    Info(TypeInfo),
}

impl TypeSpec {
    /// Flatten into the list of present tokens, discarding empty ones.
    pub fn tokens(&self) -> Vec<TypeToken> {
        let tokens = match self {
            TypeSpec::Name(name) => vec![TypeToken::Name(name.clone())],
            TypeSpec::List(list) => list.iter().flatten().cloned().collect(),
            TypeSpec::Info(info) => vec![TypeToken::Info(info.clone())],
        };
        tokens.into_iter().filter(|t| !t.is_empty()).collect()
    }
}

/// One alternative of a type.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TypeToken {
    /// Plain type text.
    Name(String),
    /// Structured form with its own collection flag.
    Info(TypeInfo),
}

impl TypeToken {
    fn is_empty(&self) -> bool {
        match self {
            TypeToken::Name(name) => name.is_empty(),
            TypeToken::Info(info) => info.type_name.is_empty(),
        }
    }
}

/// Structured type token produced by newer API-description exports.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeInfo {
    /// Type text.
    pub type_name: String,
    /// The token is an array of the type.
    #[serde(default)]
    pub collection: bool,
}
