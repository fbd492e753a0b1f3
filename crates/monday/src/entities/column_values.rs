//! The values stored in an item's columns, queried through items.

use crate::ast::Argument;
use crate::ast::Field;
use crate::entities::arguments;
use crate::entities::fields_or_id;
use crate::entities::selector;
use crate::operation::Query;

/// Defaults to `id`.
pub fn list(fields: Vec<ColumnValuesField>, args: Vec<ColumnValuesArgument>) -> Query {
    Query::new("column_values", fields_or_id(fields), arguments(args))
}

selector! {
    ColumnValuesField(Field)
}
impl ColumnValuesField {
    pub const ADDITIONAL_INFO: Self = Self(Field::leaf("additional_info"));
    /// The column's unique identifier.
    pub const ID: Self = Self(Field::leaf("id"));
    /// The column's textual value in string form.
    pub const TEXT: Self = Self(Field::leaf("text"));
    /// The column's title.
    pub const TITLE: Self = Self(Field::leaf("title"));
    /// The column's value in JSON format.
    pub const VALUE: Self = Self(Field::leaf("value"));
}

selector! {
    ColumnValuesArgument(Argument)
}
impl ColumnValuesArgument {
    /// The column ids to return values for.
    pub fn ids(ids: Vec<String>) -> Self {
        Self(Argument::new("ids", ids))
    }
}
