//! Boards: rows (items) arranged in groups, with typed columns.
//!
//! Each board has one or more owners and subscribers and one of three kinds
//! (public, private, shareable).

use crate::ast::Argument;
use crate::ast::ArgumentValue;
use crate::ast::Field;
use crate::entities::arguments;
use crate::entities::columns;
use crate::entities::columns::ColumnsField;
use crate::entities::fields_or_id;
use crate::entities::groups;
use crate::entities::groups::GroupsArgument;
use crate::entities::groups::GroupsField;
use crate::entities::items;
use crate::entities::items::ItemsArgument;
use crate::entities::items::ItemsField;
use crate::entities::selector;
use crate::entities::state::State;
use crate::entities::tags;
use crate::entities::tags::TagsArgument;
use crate::entities::tags::TagsField;
use crate::entities::updates;
use crate::entities::updates::UpdatesArgument;
use crate::entities::updates::UpdatesField;
use crate::entities::users;
use crate::entities::users::UsersArgument;
use crate::entities::users::UsersField;
use crate::operation::Mutation;
use crate::operation::Query;

/// One board or a collection of boards. Defaults to `id`.
pub fn list(fields: Vec<BoardsField>, args: Vec<BoardsArgument>) -> Query {
    Query::new("boards", fields_or_id(fields), arguments(args))
}

/// Create a new board with the given name and kind.
///
/// The name is sent unquoted, the way every plain string argument is. A name
/// holding spaces or punctuation yields a query the remote API rejects.
pub fn create(name: &str, kind: BoardKind, fields: Vec<BoardsField>) -> Mutation {
    Mutation::new(
        "create_board",
        fields_or_id(fields),
        vec![
            Argument::new("board_name", name),
            Argument::new("board_kind", kind),
        ],
    )
}

/// Create a new board from a template.
///
/// Template ids are listed in the "create board from template" screen once
/// developer mode is enabled in monday.labs.
pub fn create_from_template(
    name: &str,
    kind: BoardKind,
    template_id: i64,
    fields: Vec<BoardsField>,
) -> Mutation {
    create(name, kind, fields)
        .with_argument(Argument::new("template_id", template_id))
}

/// Archive a single board.
pub fn archive(board_id: i64, fields: Vec<BoardsField>) -> Mutation {
    Mutation::new(
        "archive_board",
        fields_or_id(fields),
        vec![Argument::new("board_id", board_id)],
    )
}

selector! {
    BoardsField(Field)
}
impl BoardsField {
    /// The board's folder unique identifier.
    pub const BOARD_FOLDER_ID: Self = Self(Field::leaf("board_folder_id"));
    /// The board's kind (public / private / share).
    pub const BOARD_KIND: Self = Self(Field::leaf("board_kind"));
    pub const DESCRIPTION: Self = Self(Field::leaf("description"));
    pub const ID: Self = Self(Field::leaf("id"));
    pub const NAME: Self = Self(Field::leaf("name"));
    pub const PERMISSIONS: Self = Self(Field::leaf("permissions"));
    /// The board's position.
    pub const POS: Self = Self(Field::leaf("pos"));
    /// The board's state (all / active / archived / deleted).
    pub const STATE: Self = Self(Field::leaf("state"));

    /// The board's visible columns.
    pub fn columns(fields: Vec<ColumnsField>) -> Self {
        Self(columns::list(fields).into_field())
    }

    /// The board's visible groups.
    pub fn groups(fields: Vec<GroupsField>, args: Vec<GroupsArgument>) -> Self {
        Self(groups::list(fields, args).into_field())
    }

    /// The board's items (rows).
    pub fn items(fields: Vec<ItemsField>, args: Vec<ItemsArgument>) -> Self {
        Self(items::list(fields, args).into_field())
    }

    /// The owner of the board.
    pub fn owner(fields: Vec<UsersField>, args: Vec<UsersArgument>) -> Self {
        Self(users::list(fields, args).renamed("owner").into_field())
    }

    /// The board's subscribers.
    pub fn subscribers(fields: Vec<UsersField>, args: Vec<UsersArgument>) -> Self {
        Self(users::list(fields, args).renamed("subscribers").into_field())
    }

    /// The board's specific tags.
    pub fn tags(fields: Vec<TagsField>, args: Vec<TagsArgument>) -> Self {
        Self(tags::list(fields, args).into_field())
    }

    pub fn updates(fields: Vec<UpdatesField>, args: Vec<UpdatesArgument>) -> Self {
        Self(updates::list(fields, args).into_field())
    }
}

selector! {
    BoardsArgument(Argument)
}
impl BoardsArgument {
    /// Number of boards to get, the remote default is 25.
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

    pub fn kind(kind: BoardKind) -> Self {
        Self(Argument::new("board_kind", kind))
    }

    /// The state of the boards, the remote default is active.
    pub fn state(state: State) -> Self {
        Self(Argument::new("state", state))
    }

    /// Get the recently created boards at the top of the list.
    pub fn newest_first(value: bool) -> Self {
        Self(Argument::new("newest_first", value))
    }
}

/// A board's kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardKind {
    Public,
    Private,
    /// Shareable with guests.
    Share,
}
impl BoardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Share => "share",
        }
    }
}
impl From<BoardKind> for ArgumentValue {
    fn from(kind: BoardKind) -> Self {
        ArgumentValue::Enum(kind.as_str())
    }
}
