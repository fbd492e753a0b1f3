//! Items: the rows of a board.

use crate::ast::Argument;
use crate::ast::Field;
use crate::column_value::ColumnValues;
use crate::entities::arguments;
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
use crate::entities::updates;
use crate::entities::updates::UpdatesArgument;
use crate::entities::updates::UpdatesField;
use crate::entities::users;
use crate::entities::users::UsersArgument;
use crate::entities::users::UsersField;
use crate::operation::Mutation;
use crate::operation::Query;

/// One item or a collection of items. Defaults to `id`.
pub fn list(fields: Vec<ItemsField>, args: Vec<ItemsArgument>) -> Query {
    Query::new("items", fields_or_id(fields), arguments(args))
}

/// Create a new item in a group.
///
/// The name is sent unquoted, the way every plain string argument is. A name
/// holding spaces or punctuation yields a query the remote API rejects.
///
/// `board_id`, `group_id` and `item_name` are always sent. `column_values` is
/// only sent when `values` holds at least one value.
pub fn create(
    board_id: i64,
    group_id: &str,
    name: &str,
    values: &ColumnValues,
    fields: Vec<ItemsField>,
) -> Mutation {
    let mut args = vec![
        Argument::new("board_id", board_id),
        Argument::new("group_id", group_id),
        Argument::new("item_name", name),
    ];
    if !values.is_empty() {
        args.push(Argument::quoted("column_values", values.join()));
    }
    Mutation::new("create_item", fields_or_id(fields), args)
}

/// Move an item to a different group.
pub fn move_to_group(item_id: i64, group_id: &str, fields: Vec<ItemsField>) -> Mutation {
    Mutation::new(
        "move_item_to_group",
        fields_or_id(fields),
        vec![
            Argument::new("item_id", item_id),
            Argument::new("group_id", group_id),
        ],
    )
}

pub fn archive(item_id: i64, fields: Vec<ItemsField>) -> Mutation {
    Mutation::new(
        "archive_item",
        fields_or_id(fields),
        vec![Argument::new("item_id", item_id)],
    )
}

pub fn delete(item_id: i64, fields: Vec<ItemsField>) -> Mutation {
    Mutation::new(
        "delete_item",
        fields_or_id(fields),
        vec![Argument::new("item_id", item_id)],
    )
}

selector! {
    ItemsField(Field)
}
impl ItemsField {
    pub const CREATED_AT: Self = Self(Field::leaf("created_at"));
    /// The unique identifier of the item creator.
    pub const CREATOR_ID: Self = Self(Field::leaf("creator_id"));
    pub const ID: Self = Self(Field::leaf("id"));
    pub const NAME: Self = Self(Field::leaf("name"));
    /// The item's state (all / active / archived / deleted).
    pub const STATE: Self = Self(Field::leaf("state"));
    /// The item's last update date.
    pub const UPDATED_AT: Self = Self(Field::leaf("updated_at"));

    /// The board that contains this item.
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

    /// The group that contains this item.
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
    ItemsArgument(Argument)
}
impl ItemsArgument {
    /// Number of items to get, the remote default is 25.
    pub fn limit(value: i64) -> Self {
        Self(Argument::new("limit", value))
    }

    /// Page number to get, starting at 1.
    pub fn page(value: i64) -> Self {
        Self(Argument::new("page", value))
    }

    pub fn ids(ids: Vec<i64>) -> Self {
        Self(Argument::new("ids", ids))
    }

    /// Get the recently created items at the top of the list.
    pub fn newest_first(value: bool) -> Self {
        Self(Argument::new("newest_first", value))
    }
}
