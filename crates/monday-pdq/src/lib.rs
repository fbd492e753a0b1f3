//! Convenience helpers over the [`monday`] client for the common
//! board / group / column / item chores.
//!
//! Every helper builds its query with the [`monday::entities`] constructors,
//! sends it with a [`monday::Client`] and decodes the `data` envelope of the
//! response into a small typed struct. The `ensure_*` helpers look an entity up
//! by name (or title) and only create it when it is missing, returning whether
//! a creation happened.

mod boards;
mod column_value;
mod columns;
mod groups;
mod items;
mod pdq_error;
mod simple_client;

pub use boards::Board;
pub use columns::Column;
pub use groups::Group;
pub use items::Item;
pub use pdq_error::PdqError;
pub use simple_client::SimpleClient;

#[cfg(test)]
mod tests;
