//! Schema-agnostic building blocks for query strings.
//!
//! A [`Selection`] names a root field, the [`Field`]s requested from it and
//! the [`Argument`]s passed to it. Fields are either leaves or relationships
//! that embed another selection, so any nesting depth composes from these
//! three types. Every node renders to its wire text through [`AstNode`].

mod argument;
mod argument_value;
pub(crate) mod ast_node;
mod field;
mod selection;

pub use argument::Argument;
pub use argument_value::ArgumentValue;
pub use ast_node::AstNode;
pub use field::Field;
pub use selection::Selection;
