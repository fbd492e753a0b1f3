use crate::column_value::ColumnValue;
use crate::column_value::ColumnValues;
use crate::column_value::People;
use chrono::NaiveDate;
use chrono::NaiveTime;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn scalar_fragments() {
    assert_eq!(ColumnValue::item_name("name", "My item").value(), r#""My item""#);
    assert_eq!(ColumnValue::text("text", "Sample text").value(), r#""Sample text""#);
    assert_eq!(
        ColumnValue::long_text("long", "Sample text").value(),
        r#"{"text":"Sample text"}"#,
    );
    assert_eq!(ColumnValue::number("numbers", 3).value(), r#""3""#);
}

#[test]
fn fragments_escape_strings() {
    assert_eq!(
        ColumnValue::text("text", r#"say "hi""#).value(),
        r#""say \"hi\"""#,
    );
}

#[test]
fn status_and_dropdown_fragments() {
    assert_eq!(ColumnValue::status_index("status", 0).value(), r#"{"index":0}"#);
    assert_eq!(ColumnValue::status_label("status", "Done").value(), r#"{"label":"Done"}"#);
    assert_eq!(ColumnValue::dropdown_index("dropdown", 1).value(), r#"{"index":1}"#);
    assert_eq!(ColumnValue::dropdown_label("dropdown", "A").value(), r#"{"label":"A"}"#);
    assert_eq!(ColumnValue::dropdown_ids("dropdown", &[1]).value(), r#"{"ids":[1]}"#);
    assert_eq!(
        ColumnValue::dropdown_labels("dropdown", &["My label"]).value(),
        r#"{"labels":["My label"]}"#,
    );
}

#[test]
fn people_fragments() {
    assert_eq!(ColumnValue::person("person", 235326).value(), r#"{"id":"235326"}"#);
    assert_eq!(ColumnValue::team("team", 51166).value(), r#"{"team_id":"51166"}"#);
    let people = ColumnValue::people(
        "people",
        &[People::person(4616627), People::person(4616666), People::team(51166)],
    );
    assert_eq!(
        people.value(),
        r#"{"personsAndTeams":[{"id":"4616627","kind":"person"},{"id":"4616666","kind":"person"},{"id":"51166","kind":"team"}]}"#,
    );
}

#[test]
fn contact_fragments() {
    assert_eq!(
        ColumnValue::world_clock("clock", "Europe/London").value(),
        r#"{"timezone":"Europe/London"}"#,
    );
    assert_eq!(
        ColumnValue::country("country", "US", "United States").value(),
        r#"{"countryCode":"US","countryName":"United States"}"#,
    );
    assert_eq!(
        ColumnValue::email("email", "itsmyemail@mailserver.com", "my email").value(),
        r#"{"email":"itsmyemail@mailserver.com","text":"my email"}"#,
    );
    assert_eq!(
        ColumnValue::phone("phone", 11231234567, "US").value(),
        r#"{"phone":"11231234567","countryShortName":"US"}"#,
    );
    assert_eq!(
        ColumnValue::url("link", "http://monday.com", "go to monday!").value(),
        r#"{"url":"http://monday.com","text":"go to monday!"}"#,
    );
}

/// Verifies the fixed `YYYY-MM-DD` / `HH:MM:SS` formats of the calendar
/// fragments.
#[test]
fn calendar_fragments() {
    let at = date(2019, 6, 3).and_hms_opt(13, 25, 0).unwrap();
    assert_eq!(
        ColumnValue::date("date", at).value(),
        r#"{"date":"2019-06-03","time":"13:25:00"}"#,
    );
    assert_eq!(
        ColumnValue::timeline("timeline", date(2019, 6, 3), date(2019, 6, 7)).value(),
        r#"{"from":"2019-06-03","to":"2019-06-07"}"#,
    );
    assert_eq!(
        ColumnValue::hour("hour", NaiveTime::from_hms_opt(16, 42, 59).unwrap()).value(),
        r#"{"hour":16,"minute":42}"#,
    );
    assert_eq!(
        ColumnValue::week("week", date(2019, 6, 10), date(2019, 6, 16)).value(),
        r#"{"week":{"startDate":"2019-06-10","endDate":"2019-06-16"}}"#,
    );
}

#[test]
fn remaining_fragments() {
    assert_eq!(
        ColumnValue::tags("tags", &[295026, 295064]).value(),
        r#"{"tag_ids":[295026,295064]}"#,
    );
    assert_eq!(ColumnValue::checkbox("check", true).value(), r#"{"checked":"true"}"#);
    assert_eq!(ColumnValue::checkbox("check", false).value(), r#"{"checked":"false"}"#);
    assert_eq!(ColumnValue::rating("rating", 5).value(), r#"{"rating":5}"#);
    assert_eq!(ColumnValue::remove("status").value(), "{}");
    assert_eq!(ColumnValue::remove("status").column_id(), "status");
}

#[test]
fn empty_values_join_to_nothing() {
    assert_eq!(ColumnValues::new().join(), "");
    assert!(ColumnValues::new().is_empty());
}

/// Verifies that joining keeps insertion order and that a later value for
/// the same column replaces the earlier one in place.
#[test]
fn values_join_in_insertion_order() {
    let values: ColumnValues = [
        ColumnValue::text("text", "a"),
        ColumnValue::status_index("status", 1),
        ColumnValue::text("text", "b"),
    ]
    .into_iter()
    .collect();
    assert_eq!(values.len(), 2);
    assert_eq!(values.join(), r#"{"text":"b","status":{"index":1}}"#);
    assert_eq!(
        values.iter().map(|(id, _)| id).collect::<Vec<_>>(),
        vec!["text", "status"],
    );
}
