//! Query cost accounting.
//!
//! Adding the complexity query next to other queries returns how much of the
//! per-minute complexity budget the request consumed. The client does not
//! interpret the result.

use crate::ast::Field;
use crate::entities::fields_or;
use crate::entities::selector;
use crate::operation::Query;

/// Defaults to `after before query`.
pub fn get(fields: Vec<ComplexityField>) -> Query {
    let fields = fields_or(fields, || vec![
        ComplexityField::AFTER.into(),
        ComplexityField::BEFORE.into(),
        ComplexityField::QUERY.into(),
    ]);
    Query::new("complexity", fields, vec![])
}

selector! {
    ComplexityField(Field)
}
impl ComplexityField {
    /// The remainder of complexity after the query's execution.
    pub const AFTER: Self = Self(Field::leaf("after"));
    /// The remainder of complexity before the query's execution.
    pub const BEFORE: Self = Self(Field::leaf("before"));
    /// The specific query's complexity.
    pub const QUERY: Self = Self(Field::leaf("query"));
}
