use crate::ast::Argument;
use crate::ast::Field;
use crate::entities::arguments;
use crate::entities::fields_or_id;
use crate::entities::selector;
use crate::entities::users;
use crate::entities::users::UsersArgument;
use crate::entities::users::UsersField;
use crate::operation::Query;

/// Defaults to `id`.
pub fn list(fields: Vec<TeamsField>, args: Vec<TeamsArgument>) -> Query {
    Query::new("teams", fields_or_id(fields), arguments(args))
}

selector! {
    TeamsField(Field)
}
impl TeamsField {
    pub const ID: Self = Self(Field::leaf("id"));
    pub const NAME: Self = Self(Field::leaf("name"));
    pub const PICTURE_URL: Self = Self(Field::leaf("picture_url"));

    /// The users in the team.
    pub fn users(fields: Vec<UsersField>, args: Vec<UsersArgument>) -> Self {
        Self(users::list(fields, args).into_field())
    }
}

selector! {
    TeamsArgument(Argument)
}
impl TeamsArgument {
    pub fn ids(ids: Vec<i64>) -> Self {
        Self(Argument::new("ids", ids))
    }
}
