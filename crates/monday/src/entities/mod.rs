//! Typed selectors for every entity of the remote schema.
//!
//! Each module exposes, for one entity:
//!
//! * a `XField` type with constants for its scalar fields and constructors
//!   for its relationship fields (which recurse into the related entity's
//!   list constructor),
//! * a `XArgument` type with one constructor per recognized argument,
//! * `list`/`get` query constructors and, where the entity supports it,
//!   mutation constructors taking the required arguments positionally.
//!
//! The wrapper types only exist so that a board's fields cannot be passed to
//! the items constructor and so on; they carry no behavior of their own.

use crate::ast::Argument;
use crate::ast::Field;

pub mod account;
pub mod boards;
pub mod column_values;
pub mod columns;
pub mod complexity;
pub mod groups;
pub mod items;
pub mod items_by_column_values;
pub mod notifications;
pub mod plan;
pub mod replies;
pub mod state;
pub mod tags;
pub mod teams;
pub mod updates;
pub mod users;
pub mod webhooks;

/// Declare a newtype selector over an AST node.
macro_rules! selector {
    ($(#[$meta:meta])* $name:ident($inner:ty)) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name(pub(crate) $inner);

        impl From<$name> for $inner {
            fn from(selector: $name) -> $inner {
                selector.0
            }
        }
    };
}
pub(crate) use selector;

/// Unwrap typed field selectors, substituting `default` when none were given.
pub(crate) fn fields_or<F: Into<Field>>(
    fields: Vec<F>,
    default: impl FnOnce() -> Vec<Field>,
) -> Vec<Field> {
    if fields.is_empty() {
        return default();
    }
    fields.into_iter().map(Into::into).collect()
}

/// Unwrap typed field selectors, defaulting to the entity's `id` field.
pub(crate) fn fields_or_id<F: Into<Field>>(fields: Vec<F>) -> Vec<Field> {
    fields_or(fields, || vec![Field::leaf("id")])
}

pub(crate) fn arguments<A: Into<Argument>>(args: Vec<A>) -> Vec<Argument> {
    args.into_iter().map(Into::into).collect()
}
