//! Groups: the sections a board's items are arranged in.

use crate::ast::Argument;
use crate::ast::Field;
use crate::entities::arguments;
use crate::entities::fields_or_id;
use crate::entities::items;
use crate::entities::items::ItemsArgument;
use crate::entities::items::ItemsField;
use crate::entities::selector;
use crate::operation::Mutation;
use crate::operation::Query;

/// One group or a collection of groups of a board. Only reachable nested under
/// a board. Defaults to `id`.
pub fn list(fields: Vec<GroupsField>, args: Vec<GroupsArgument>) -> Query {
    Query::new("groups", fields_or_id(fields), arguments(args))
}

/// Duplicate a group with all of its items.
pub fn duplicate(
    board_id: i64,
    group_id: &str,
    add_to_top: bool,
    fields: Vec<GroupsField>,
) -> Mutation {
    Mutation::new(
        "duplicate_group",
        fields_or_id(fields),
        vec![
            Argument::new("board_id", board_id),
            Argument::new("group_id", group_id),
            Argument::new("add_to_top", add_to_top),
        ],
    )
}

/// Duplicate a group with all of its items, giving the copy a new title.
pub fn duplicate_with_title(
    board_id: i64,
    group_id: &str,
    add_to_top: bool,
    title: &str,
    fields: Vec<GroupsField>,
) -> Mutation {
    duplicate(board_id, group_id, add_to_top, fields)
        .with_argument(Argument::new("group_title", title))
}

/// Create a new empty group.
///
/// The name is sent unquoted, the way every plain string argument is. A name
/// holding spaces or punctuation yields a query the remote API rejects.
pub fn create(board_id: i64, group_name: &str, fields: Vec<GroupsField>) -> Mutation {
    Mutation::new(
        "create_group",
        fields_or_id(fields),
        vec![
            Argument::new("board_id", board_id),
            Argument::new("group_name", group_name),
        ],
    )
}

/// Archive a group with all of its items.
pub fn archive(board_id: i64, group_id: &str, fields: Vec<GroupsField>) -> Mutation {
    Mutation::new(
        "archive_group",
        fields_or_id(fields),
        vec![
            Argument::new("board_id", board_id),
            Argument::new("group_id", group_id),
        ],
    )
}

/// Delete a group with all of its items.
pub fn delete(board_id: i64, group_id: &str, fields: Vec<GroupsField>) -> Mutation {
    Mutation::new(
        "delete_group",
        fields_or_id(fields),
        vec![
            Argument::new("board_id", board_id),
            Argument::new("group_id", group_id),
        ],
    )
}

selector! {
    GroupsField(Field)
}
impl GroupsField {
    pub const ARCHIVED: Self = Self(Field::leaf("archived"));
    pub const COLOR: Self = Self(Field::leaf("color"));
    pub const DELETED: Self = Self(Field::leaf("deleted"));
    pub const ID: Self = Self(Field::leaf("id"));
    /// The group's position in the board.
    pub const POSITION: Self = Self(Field::leaf("position"));
    pub const TITLE: Self = Self(Field::leaf("title"));

    /// The items in the group.
    pub fn items(fields: Vec<ItemsField>, args: Vec<ItemsArgument>) -> Self {
        Self(items::list(fields, args).into_field())
    }
}

selector! {
    GroupsArgument(Argument)
}
impl GroupsArgument {
    pub fn ids(ids: Vec<String>) -> Self {
        Self(Argument::new("ids", ids))
    }
}
