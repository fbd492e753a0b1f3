//! Notifications sent to users from within the platform.
//!
//! Notifications are delivered asynchronously, so their ids cannot be queried
//! back after sending them out.

use crate::ast::Argument;
use crate::ast::ArgumentValue;
use crate::ast::Field;
use crate::entities::fields_or;
use crate::entities::selector;
use crate::operation::Mutation;

/// Notify `user_id` about `target_id`. Defaults to `text`.
pub fn create(
    user_id: i64,
    target_id: i64,
    text: &str,
    target_type: NotificationTargetType,
    fields: Vec<NotificationsField>,
) -> Mutation {
    let fields = fields_or(fields, || vec![NotificationsField::TEXT.into()]);
    Mutation::new(
        "create_notification",
        fields,
        vec![
            Argument::new("text", text),
            Argument::new("user_id", user_id),
            Argument::new("target_id", target_id),
            Argument::new("target_type", target_type),
        ],
    )
}

/// Like [`create`], also attaching a JSON `payload`.
pub fn create_with_payload(
    user_id: i64,
    target_id: i64,
    text: &str,
    payload: &str,
    target_type: NotificationTargetType,
    fields: Vec<NotificationsField>,
) -> Mutation {
    create(user_id, target_id, text, target_type, fields)
        .with_argument(Argument::quoted("payload", payload))
}

selector! {
    NotificationsField(Field)
}
impl NotificationsField {
    pub const ID: Self = Self(Field::leaf("id"));
    pub const TEXT: Self = Self(Field::leaf("text"));
}

/// What a notification points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationTargetType {
    /// An item or a board.
    Project,
    /// An update.
    Post,
}
impl NotificationTargetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Post => "post",
        }
    }
}
impl From<NotificationTargetType> for ArgumentValue {
    fn from(target_type: NotificationTargetType) -> Self {
        ArgumentValue::Enum(target_type.as_str())
    }
}
