//! Typed query and mutation builders for the monday.com GraphQL API, and a
//! thin async client to send them.
//!
//! Queries and mutations are assembled from per-entity constructors in
//! [`entities`], which only accept the fields and arguments valid for that
//! entity, then bundled into a [`Payload`] and sent with a [`Client`]:
//!
//! ```no_run
//! use monday::entities::boards;
//! use monday::entities::boards::BoardsArgument;
//! use monday::entities::boards::BoardsField;
//! use monday::Client;
//! use monday::Payload;
//!
//! # async fn run() -> Result<(), monday::ClientError> {
//! let query = boards::list(
//!     vec![BoardsField::ID, BoardsField::NAME],
//!     vec![BoardsArgument::limit(5)],
//! );
//! let response = Client::from_env()?
//!     .exec(&Payload::queries([query]))
//!     .await?;
//! println!("{}", response.text().await?);
//! # Ok(())
//! # }
//! ```

pub mod ast;
mod client;
mod client_error;
pub mod column_value;
pub mod entities;
pub mod operation;

pub use client::Client;
pub use client::ClientBuilder;
pub use client::DEFAULT_ENDPOINT;
pub use client::ENDPOINT_VAR;
pub use client::TOKEN_VAR;
pub use client_error::ClientError;
pub use column_value::ColumnValue;
pub use column_value::ColumnValues;
pub use operation::Mutation;
pub use operation::Payload;
pub use operation::Query;
pub use tokio_util::sync::CancellationToken;

#[cfg(test)]
mod tests;
