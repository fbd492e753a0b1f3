//! Users of the account, including guests and pending invitations.

use crate::ast::Argument;
use crate::ast::ArgumentValue;
use crate::ast::Field;
use crate::entities::account;
use crate::entities::account::AccountField;
use crate::entities::arguments;
use crate::entities::fields_or_id;
use crate::entities::selector;
use crate::entities::teams;
use crate::entities::teams::TeamsArgument;
use crate::entities::teams::TeamsField;
use crate::operation::Query;

/// Defaults to `id`.
pub fn list(fields: Vec<UsersField>, args: Vec<UsersArgument>) -> Query {
    Query::new("users", fields_or_id(fields), arguments(args))
}

/// The user owning the API token. Same vocabulary as [`list`].
pub fn me(fields: Vec<UsersField>, args: Vec<UsersArgument>) -> Query {
    list(fields, args).renamed("me")
}

selector! {
    UsersField(Field)
}
impl UsersField {
    pub const BIRTHDAY: Self = Self(Field::leaf("birthday"));
    pub const COUNTRY_CODE: Self = Self(Field::leaf("country_code"));
    pub const CREATED_AT: Self = Self(Field::leaf("created_at"));
    pub const EMAIL: Self = Self(Field::leaf("email"));
    pub const ENABLED: Self = Self(Field::leaf("enabled"));
    pub const ID: Self = Self(Field::leaf("id"));
    pub const IS_GUEST: Self = Self(Field::leaf("is_guest"));
    /// Whether the user has not accepted the invitation yet.
    pub const IS_PENDING: Self = Self(Field::leaf("is_pending"));
    pub const JOIN_DATE: Self = Self(Field::leaf("join_date"));
    pub const LOCATION: Self = Self(Field::leaf("location"));
    pub const MOBILE_PHONE: Self = Self(Field::leaf("mobile_phone"));
    pub const NAME: Self = Self(Field::leaf("name"));
    pub const PHONE: Self = Self(Field::leaf("phone"));
    pub const PHOTO_ORIGINAL: Self = Self(Field::leaf("photo_original"));
    pub const PHOTO_SMALL: Self = Self(Field::leaf("photo_small"));
    pub const PHOTO_THUMB: Self = Self(Field::leaf("photo_thumb"));
    pub const PHOTO_THUMB_SMALL: Self = Self(Field::leaf("photo_thumb_small"));
    pub const PHOTO_TINY: Self = Self(Field::leaf("photo_tiny"));
    pub const TIME_ZONE_IDENTIFIER: Self = Self(Field::leaf("time_zone_identifier"));
    /// The user's job title.
    pub const TITLE: Self = Self(Field::leaf("title"));
    /// The user's profile url.
    pub const URL: Self = Self(Field::leaf("url"));
    /// The user's UTC hours difference.
    pub const UTC_HOURS_DIFF: Self = Self(Field::leaf("utc_hours_diff"));

    /// The user's account.
    pub fn account(fields: Vec<AccountField>) -> Self {
        Self(account::get(fields).into_field())
    }

    /// The teams the user is a member in.
    pub fn teams(fields: Vec<TeamsField>, args: Vec<TeamsArgument>) -> Self {
        Self(teams::list(fields, args).into_field())
    }
}

selector! {
    UsersArgument(Argument)
}
impl UsersArgument {
    pub fn ids(ids: Vec<i64>) -> Self {
        Self(Argument::new("ids", ids))
    }

    pub fn kind(kind: UserKind) -> Self {
        Self(Argument::new("kind", kind))
    }

    pub fn newest_first(value: bool) -> Self {
        Self(Argument::new("newest_first", value))
    }

    /// Number of users to get.
    pub fn limit(value: i64) -> Self {
        Self(Argument::new("limit", value))
    }
}

/// Which users of the account to list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserKind {
    All,
    /// Only company members.
    NonGuests,
    Guests,
    /// Every member that accepted the invitation.
    NonPending,
}
impl UserKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::NonGuests => "non_guests",
            Self::Guests => "guests",
            Self::NonPending => "non_pending",
        }
    }
}
impl From<UserKind> for ArgumentValue {
    fn from(kind: UserKind) -> Self {
        ArgumentValue::Enum(kind.as_str())
    }
}
