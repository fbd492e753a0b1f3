//! Updates: the conversation thread attached to an item.

use crate::ast::Argument;
use crate::ast::Field;
use crate::entities::arguments;
use crate::entities::fields_or_id;
use crate::entities::replies;
use crate::entities::replies::RepliesField;
use crate::entities::selector;
use crate::entities::users;
use crate::entities::users::UsersArgument;
use crate::entities::users::UsersField;
use crate::operation::Mutation;
use crate::operation::Query;

/// Defaults to `id`.
pub fn list(fields: Vec<UpdatesField>, args: Vec<UpdatesArgument>) -> Query {
    Query::new("updates", fields_or_id(fields), arguments(args))
}

/// Post a new update on an item.
pub fn create(item_id: i64, body: &str, fields: Vec<UpdatesField>) -> Mutation {
    Mutation::new(
        "create_update",
        fields_or_id(fields),
        vec![
            Argument::new("item_id", item_id),
            Argument::new("body", body),
        ],
    )
}

selector! {
    UpdatesField(Field)
}
impl UpdatesField {
    /// The update's html formatted body.
    pub const BODY: Self = Self(Field::leaf("body"));
    pub const CREATED_AT: Self = Self(Field::leaf("created_at"));
    pub const CREATOR_ID: Self = Self(Field::leaf("creator_id"));
    pub const ID: Self = Self(Field::leaf("id"));
    /// The id of the item the update was posted on.
    pub const ITEM_ID: Self = Self(Field::leaf("item_id"));
    pub const TEXT_BODY: Self = Self(Field::leaf("text_body"));
    pub const UPDATED_AT: Self = Self(Field::leaf("updated_at"));

    pub fn creator(fields: Vec<UsersField>, args: Vec<UsersArgument>) -> Self {
        Self(users::list(fields, args).renamed("creator").into_field())
    }

    /// The update's replies.
    pub fn replies(fields: Vec<RepliesField>) -> Self {
        Self(replies::list(fields).into_field())
    }
}

selector! {
    UpdatesArgument(Argument)
}
impl UpdatesArgument {
    /// Number of updates to get, the remote default is 25.
    pub fn limit(value: i64) -> Self {
        Self(Argument::new("limit", value))
    }

    pub fn page(value: i64) -> Self {
        Self(Argument::new("page", value))
    }
}
