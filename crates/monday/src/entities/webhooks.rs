//! Webhooks reporting board events to an external URL.

use crate::ast::Argument;
use crate::ast::ArgumentValue;
use crate::ast::Field;
use crate::entities::fields_or_id;
use crate::entities::selector;
use crate::operation::Mutation;

/// Report `event` on `board_id` to `url`. Defaults to `id`.
pub fn create(board_id: i64, url: &str, event: WebhookEvent, fields: Vec<WebhookField>) -> Mutation {
    Mutation::new(
        "create_webhook",
        fields_or_id(fields),
        vec![
            Argument::new("board_id", board_id),
            Argument::new("url", url),
            Argument::new("event", event),
        ],
    )
}

/// Stop a webhook from reporting events.
pub fn delete(webhook_id: i64, fields: Vec<WebhookField>) -> Mutation {
    Mutation::new(
        "delete_webhook",
        fields_or_id(fields),
        vec![Argument::new("id", webhook_id)],
    )
}

selector! {
    WebhookField(Field)
}
impl WebhookField {
    pub const BOARD_ID: Self = Self(Field::leaf("board_id"));
    pub const ID: Self = Self(Field::leaf("id"));
}

/// The board events a webhook can listen to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WebhookEvent {
    ChangeColumnValue,
    CreateItem,
    /// An update was posted on an item of the board.
    CreateUpdate,
}
impl WebhookEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ChangeColumnValue => "change_column_value",
            Self::CreateItem => "create_item",
            Self::CreateUpdate => "create_update",
        }
    }
}
impl From<WebhookEvent> for ArgumentValue {
    fn from(event: WebhookEvent) -> Self {
        ArgumentValue::Enum(event.as_str())
    }
}
