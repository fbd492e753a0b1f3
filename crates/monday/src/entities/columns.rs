//! Board columns, and the mutations that write column values on items.

use crate::ast::Argument;
use crate::ast::ArgumentValue;
use crate::ast::Field;
use crate::column_value::ColumnValue;
use crate::column_value::ColumnValues;
use crate::entities::fields_or_id;
use crate::entities::items::ItemsField;
use crate::entities::selector;
use crate::operation::Mutation;
use crate::operation::Query;

/// A board's columns. Only reachable nested under a board. Defaults to `id`.
pub fn list(fields: Vec<ColumnsField>) -> Query {
    Query::new("columns", fields_or_id(fields), vec![])
}

/// Create a new column on a board.
pub fn create(
    board_id: i64,
    title: &str,
    column_type: ColumnType,
    fields: Vec<ColumnsField>,
) -> Mutation {
    Mutation::new(
        "create_column",
        fields_or_id(fields),
        vec![
            Argument::new("board_id", board_id),
            Argument::new("title", title),
            Argument::new("column_type", column_type),
        ],
    )
}

/// Create a new column whose settings start from `defaults`, a JSON document
/// such as `{"labels":["Done","Stuck"]}` for a status column.
pub fn create_with_defaults(
    board_id: i64,
    title: &str,
    column_type: ColumnType,
    defaults: &str,
    fields: Vec<ColumnsField>,
) -> Mutation {
    create(board_id, title, column_type, fields)
        .with_argument(Argument::quoted("defaults", defaults))
}

/// Change a single column value of an item.
pub fn change_value(
    item_id: i64,
    board_id: i64,
    value: &ColumnValue,
    fields: Vec<ItemsField>,
) -> Mutation {
    Mutation::new(
        "change_column_value",
        fields_or_id(fields),
        vec![
            Argument::new("item_id", item_id),
            Argument::new("column_id", value.column_id()),
            Argument::new("board_id", board_id),
            Argument::quoted("value", value.value()),
        ],
    )
}

/// Change several column values of an item at once.
pub fn change_multiple_values(
    item_id: i64,
    board_id: i64,
    values: &ColumnValues,
    fields: Vec<ItemsField>,
) -> Mutation {
    Mutation::new(
        "change_multiple_column_values",
        fields_or_id(fields),
        vec![
            Argument::new("item_id", item_id),
            Argument::new("board_id", board_id),
            Argument::quoted("column_values", values.join()),
        ],
    )
}

selector! {
    ColumnsField(Field)
}
impl ColumnsField {
    pub const ARCHIVED: Self = Self(Field::leaf("archived"));
    pub const ID: Self = Self(Field::leaf("id"));
    /// The column's settings in a string form.
    pub const SETTINGS_STR: Self = Self(Field::leaf("settings_str"));
    pub const TITLE: Self = Self(Field::leaf("title"));
    pub const TYPE: Self = Self(Field::leaf("type"));
    pub const WIDTH: Self = Self(Field::leaf("width"));
}

/// The type of a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnType {
    /// Number items according to their order in the group/board.
    AutoNumber,
    Checkbox,
    Country,
    ColorPicker,
    /// The item creator and creation date, filled in automatically.
    CreationLog,
    Date,
    Dropdown,
    Email,
    Hour,
    /// A unique id for each item.
    ItemId,
    /// The person that last updated the item, and when.
    LastUpdated,
    Link,
    Location,
    LongText,
    Numbers,
    People,
    Phone,
    /// Progress combined from status columns.
    Progress,
    Rating,
    Status,
    Team,
    Tags,
    Text,
    Timeline,
    TimeTracking,
    Vote,
    Week,
    WorldClock,
}
impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AutoNumber => "auto_number",
            Self::Checkbox => "checkbox",
            Self::Country => "country",
            Self::ColorPicker => "color_picker",
            Self::CreationLog => "creation_log",
            Self::Date => "date",
            Self::Dropdown => "dropdown",
            Self::Email => "email",
            Self::Hour => "hour",
            Self::ItemId => "item_id",
            Self::LastUpdated => "last_updated",
            Self::Link => "link",
            Self::Location => "location",
            Self::LongText => "long_text",
            Self::Numbers => "numbers",
            Self::People => "people",
            Self::Phone => "phone",
            Self::Progress => "progress",
            Self::Rating => "rating",
            Self::Status => "status",
            Self::Team => "team",
            Self::Tags => "tags",
            Self::Text => "text",
            Self::Timeline => "timeline",
            Self::TimeTracking => "time_tracking",
            Self::Vote => "vote",
            Self::Week => "week",
            Self::WorldClock => "world_clock",
        }
    }
}
impl From<ColumnType> for ArgumentValue {
    fn from(column_type: ColumnType) -> Self {
        ArgumentValue::Enum(column_type.as_str())
    }
}
