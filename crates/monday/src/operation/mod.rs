mod mutation;
mod operation_kind;
mod operation_trait;
mod payload;
mod query;

pub use mutation::Mutation;
pub use operation_kind::OperationKind;
use operation_trait::OperationTrait;
pub use payload::Payload;
pub use query::Query;

#[cfg(test)]
mod tests;
