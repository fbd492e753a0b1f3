//! Searching a board's items by the value held in one of their columns.

use crate::ast::Argument;
use crate::ast::Field;
use crate::column_value::ColumnValue;
use crate::entities::boards;
use crate::entities::boards::BoardsArgument;
use crate::entities::boards::BoardsField;
use crate::entities::column_values;
use crate::entities::column_values::ColumnValuesArgument;
use crate::entities::column_values::ColumnValuesField;
use crate::entities::fields_or_id;
use crate::entities::groups;
use crate::entities::groups::GroupsArgument;
use crate::entities::groups::GroupsField;
use crate::entities::selector;
use crate::entities::state::State;
use crate::entities::updates;
use crate::entities::updates::UpdatesArgument;
use crate::entities::updates::UpdatesField;
use crate::entities::users;
use crate::entities::users::UsersArgument;
use crate::entities::users::UsersField;
use crate::operation::Query;

/// The items of `board_id` whose `column_id` column holds `value`.
///
/// `board_id`, `column_id` and `column_value` lead the argument list, followed
/// by `args` in order. Only the JSON fragment of `value` is sent. Defaults to
/// `id`.
pub fn list(
    board_id: i64,
    column_id: &str,
    value: &ColumnValue,
    fields: Vec<ItemsByColumnValuesField>,
    args: Vec<ItemsByColumnValuesArgument>,
) -> Query {
    let mut arguments = vec![
        Argument::new("board_id", board_id),
        Argument::new("column_id", column_id),
        Argument::new("column_value", value.value()),
    ];
    arguments.extend(args.into_iter().map(Argument::from));
    Query::new("items_by_column_values", fields_or_id(fields), arguments)
}

selector! {
    ItemsByColumnValuesField(Field)
}
impl ItemsByColumnValuesField {
    pub const CREATED_AT: Self = Self(Field::leaf("created_at"));
    pub const CREATOR_ID: Self = Self(Field::leaf("creator_id"));
    pub const ID: Self = Self(Field::leaf("id"));
    pub const NAME: Self = Self(Field::leaf("name"));
    pub const STATE: Self = Self(Field::leaf("state"));
    pub const UPDATED_AT: Self = Self(Field::leaf("updated_at"));

    pub fn board(fields: Vec<BoardsField>, args: Vec<BoardsArgument>) -> Self {
        Self(boards::list(fields, args).renamed("board").into_field())
    }

    pub fn column_values(
        fields: Vec<ColumnValuesField>,
        args: Vec<ColumnValuesArgument>,
    ) -> Self {
        Self(column_values::list(fields, args).into_field())
    }

    pub fn creator(fields: Vec<UsersField>, args: Vec<UsersArgument>) -> Self {
        Self(users::list(fields, args).renamed("creator").into_field())
    }

    pub fn group(fields: Vec<GroupsField>, args: Vec<GroupsArgument>) -> Self {
        Self(groups::list(fields, args).renamed("group").into_field())
    }

    pub fn subscribers(fields: Vec<UsersField>, args: Vec<UsersArgument>) -> Self {
        Self(users::list(fields, args).renamed("subscribers").into_field())
    }

    pub fn updates(fields: Vec<UpdatesField>, args: Vec<UpdatesArgument>) -> Self {
        Self(updates::list(fields, args).into_field())
    }
}

selector! {
    ItemsByColumnValuesArgument(Argument)
}
impl ItemsByColumnValuesArgument {
    pub fn limit(value: i64) -> Self {
        Self(Argument::new("limit", value))
    }

    pub fn page(value: i64) -> Self {
        Self(Argument::new("page", value))
    }

    /// The column type the searched column is expected to have.
    pub fn column_type(value: impl Into<String>) -> Self {
        Self(Argument::new("column_type", value.into()))
    }

    pub fn state(state: State) -> Self {
        Self(Argument::new("state", state))
    }
}
