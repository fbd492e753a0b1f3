//! Tags: labels shared across public boards, or private to one board.

use crate::ast::Argument;
use crate::ast::Field;
use crate::entities::arguments;
use crate::entities::fields_or_id;
use crate::entities::selector;
use crate::operation::Mutation;
use crate::operation::Query;

/// Defaults to `id`.
pub fn list(fields: Vec<TagsField>, args: Vec<TagsArgument>) -> Query {
    Query::new("tags", fields_or_id(fields), arguments(args))
}

/// Create a tag, or get it if one with the same name already exists.
pub fn create_or_get(name: &str, fields: Vec<TagsField>) -> Mutation {
    Mutation::new(
        "create_or_get_tag",
        fields_or_id(fields),
        vec![Argument::new("tag_name", name)],
    )
}

/// [`create_or_get`] for a private board, which keeps its own tags.
pub fn create_or_get_for_board(name: &str, board_id: i64, fields: Vec<TagsField>) -> Mutation {
    create_or_get(name, fields).with_argument(Argument::new("board_id", board_id))
}

selector! {
    TagsField(Field)
}
impl TagsField {
    /// The tag's color.
    pub const COLOR: Self = Self(Field::leaf("color"));
    pub const ID: Self = Self(Field::leaf("id"));
    pub const NAME: Self = Self(Field::leaf("name"));
}

selector! {
    TagsArgument(Argument)
}
impl TagsArgument {
    pub fn ids(ids: Vec<i64>) -> Self {
        Self(Argument::new("ids", ids))
    }
}
