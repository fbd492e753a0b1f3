use crate::ast::Field;
use crate::entities::fields_or_id;
use crate::entities::selector;
use crate::entities::users;
use crate::entities::users::UsersArgument;
use crate::entities::users::UsersField;
use crate::operation::Query;

/// The replies to an update. Only reachable nested under an update.
pub fn list(fields: Vec<RepliesField>) -> Query {
    Query::new("replies", fields_or_id(fields), vec![])
}

selector! {
    RepliesField(Field)
}
impl RepliesField {
    pub const BODY: Self = Self(Field::leaf("body"));
    pub const CREATED_AT: Self = Self(Field::leaf("created_at"));
    pub const CREATOR_ID: Self = Self(Field::leaf("creator_id"));
    pub const ID: Self = Self(Field::leaf("id"));
    /// The reply's text body, stripped of markup.
    pub const TEXT_BODY: Self = Self(Field::leaf("text_body"));
    pub const UPDATED_AT: Self = Self(Field::leaf("updated_at"));

    pub fn creator(fields: Vec<UsersField>, args: Vec<UsersArgument>) -> Self {
        Self(users::list(fields, args).renamed("creator").into_field())
    }
}
