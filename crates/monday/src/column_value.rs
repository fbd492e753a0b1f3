//! JSON fragments the remote API expects when writing a column's value.
//!
//! The shape of a fragment depends on the column's type: a text column takes a
//! bare JSON string, a status column takes `{"index":N}` or `{"label":"L"}`,
//! and so on. Each constructor below targets one column type and records the
//! id of the column the value is for.

use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::NaiveTime;
use chrono::Timelike;
use indexmap::IndexMap;
use serde_json::json;
use serde_json::Value;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// The value of one column of an item, already rendered as a JSON fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnValue {
    column_id: String,
    value: String,
}
impl ColumnValue {
    fn new(column_id: impl Into<String>, value: Value) -> Self {
        Self {
            column_id: column_id.into(),
            value: value.to_string(),
        }
    }

    /// The id of the column this value is written to.
    pub fn column_id(&self) -> &str {
        &self.column_id
    }

    /// The JSON fragment.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn item_name(column_id: impl Into<String>, name: &str) -> Self {
        Self::new(column_id, json!(name))
    }

    pub fn text(column_id: impl Into<String>, text: &str) -> Self {
        Self::new(column_id, json!(text))
    }

    pub fn long_text(column_id: impl Into<String>, text: &str) -> Self {
        Self::new(column_id, json!({ "text": text }))
    }

    /// Numbers columns take their value as a JSON string.
    pub fn number(column_id: impl Into<String>, number: i64) -> Self {
        Self::new(column_id, json!(number.to_string()))
    }

    pub fn status_index(column_id: impl Into<String>, index: i64) -> Self {
        Self::new(column_id, json!({ "index": index }))
    }

    pub fn status_label(column_id: impl Into<String>, label: &str) -> Self {
        Self::new(column_id, json!({ "label": label }))
    }

    pub fn dropdown_index(column_id: impl Into<String>, index: i64) -> Self {
        Self::status_index(column_id, index)
    }

    pub fn dropdown_label(column_id: impl Into<String>, label: &str) -> Self {
        Self::status_label(column_id, label)
    }

    /// Select several dropdown options by id.
    pub fn dropdown_ids(column_id: impl Into<String>, ids: &[i64]) -> Self {
        Self::new(column_id, json!({ "ids": ids }))
    }

    /// Select several dropdown options by label.
    pub fn dropdown_labels(column_id: impl Into<String>, labels: &[&str]) -> Self {
        Self::new(column_id, json!({ "labels": labels }))
    }

    pub fn person(column_id: impl Into<String>, user_id: i64) -> Self {
        Self::new(column_id, json!({ "id": user_id.to_string() }))
    }

    pub fn team(column_id: impl Into<String>, team_id: i64) -> Self {
        Self::new(column_id, json!({ "team_id": team_id.to_string() }))
    }

    /// Assign any mix of users and teams to a people column.
    pub fn people(column_id: impl Into<String>, people: &[People]) -> Self {
        let persons_and_teams: Vec<Value> = people
            .iter()
            .map(|p| json!({ "id": p.id.to_string(), "kind": p.kind.as_str() }))
            .collect();
        Self::new(column_id, json!({ "personsAndTeams": persons_and_teams }))
    }

    /// `timezone` is an IANA zone name such as `Europe/London`.
    pub fn world_clock(column_id: impl Into<String>, timezone: &str) -> Self {
        Self::new(column_id, json!({ "timezone": timezone }))
    }

    /// `code` is the ISO 3166-1 alpha-2 country code.
    pub fn country(column_id: impl Into<String>, code: &str, name: &str) -> Self {
        Self::new(column_id, json!({ "countryCode": code, "countryName": name }))
    }

    pub fn email(column_id: impl Into<String>, email: &str, text: &str) -> Self {
        Self::new(column_id, json!({ "email": email, "text": text }))
    }

    pub fn phone(column_id: impl Into<String>, number: i64, country_code: &str) -> Self {
        Self::new(
            column_id,
            json!({ "phone": number.to_string(), "countryShortName": country_code }),
        )
    }

    pub fn url(column_id: impl Into<String>, url: &str, text: &str) -> Self {
        Self::new(column_id, json!({ "url": url, "text": text }))
    }

    pub fn date(column_id: impl Into<String>, at: NaiveDateTime) -> Self {
        Self::new(
            column_id,
            json!({
                "date": at.format(DATE_FORMAT).to_string(),
                "time": at.format(TIME_FORMAT).to_string(),
            }),
        )
    }

    pub fn timeline(column_id: impl Into<String>, from: NaiveDate, to: NaiveDate) -> Self {
        Self::new(
            column_id,
            json!({
                "from": from.format(DATE_FORMAT).to_string(),
                "to": to.format(DATE_FORMAT).to_string(),
            }),
        )
    }

    pub fn tags(column_id: impl Into<String>, tag_ids: &[i64]) -> Self {
        Self::new(column_id, json!({ "tag_ids": tag_ids }))
    }

    /// Seconds are dropped.
    pub fn hour(column_id: impl Into<String>, at: NaiveTime) -> Self {
        Self::new(column_id, json!({ "hour": at.hour(), "minute": at.minute() }))
    }

    pub fn week(column_id: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(
            column_id,
            json!({
                "week": {
                    "startDate": start.format(DATE_FORMAT).to_string(),
                    "endDate": end.format(DATE_FORMAT).to_string(),
                }
            }),
        )
    }

    pub fn checkbox(column_id: impl Into<String>, checked: bool) -> Self {
        Self::new(column_id, json!({ "checked": checked.to_string() }))
    }

    pub fn rating(column_id: impl Into<String>, rating: i64) -> Self {
        Self::new(column_id, json!({ "rating": rating }))
    }

    /// Clear the column.
    pub fn remove(column_id: impl Into<String>) -> Self {
        Self::new(column_id, json!({}))
    }
}

/// A user or a team assigned to a people column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct People {
    pub id: i64,
    pub kind: PeopleKind,
}
impl People {
    pub fn person(id: i64) -> Self {
        Self { id, kind: PeopleKind::Person }
    }

    pub fn team(id: i64) -> Self {
        Self { id, kind: PeopleKind::Team }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PeopleKind {
    Person,
    Team,
}
impl PeopleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Team => "team",
        }
    }
}

/// Several column values of one item, keyed by column id.
///
/// Insertion order is kept. Inserting a second value for the same column
/// replaces the first one in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnValues(IndexMap<String, String>);
impl ColumnValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, value: ColumnValue) {
        self.0.insert(value.column_id, value.value);
    }

    /// Return these values with `value` inserted.
    pub fn with(mut self, value: ColumnValue) -> Self {
        self.insert(value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over `(column_id, fragment)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(id, value)| (id.as_str(), value.as_str()))
    }

    /// Render every value as one JSON object, `{"<column_id>":<fragment>,...}`,
    /// or the empty string when there are no values.
    pub fn join(&self) -> String {
        if self.0.is_empty() {
            return String::new();
        }
        let members: Vec<String> = self
            .0
            .iter()
            .map(|(id, value)| format!("{}:{value}", Value::String(id.to_owned())))
            .collect();
        format!("{{{}}}", members.join(","))
    }
}

impl FromIterator<ColumnValue> for ColumnValues {
    fn from_iter<I: IntoIterator<Item = ColumnValue>>(iter: I) -> Self {
        let mut values = Self::new();
        iter.into_iter().for_each(|value| values.insert(value));
        values
    }
}

impl From<ColumnValue> for ColumnValues {
    fn from(value: ColumnValue) -> Self {
        Self::new().with(value)
    }
}
