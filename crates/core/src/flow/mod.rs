//! Flow declaration AST and emission.
//!
//! - `types`: Flow AST (FlowType, FlowProp, FlowFunction, Declaration, Namespace)
//! - `emit`: AST to code strings via the `Emit` trait
//! - `utils`: key quoting and string escaping

mod emit;
mod types;
pub mod utils;

pub use emit::Emit;
pub use types::{Declaration, FlowFunction, FlowParam, FlowProp, FlowType, Namespace};
