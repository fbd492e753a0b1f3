use crate::tests::test_utils::respond;
use crate::tests::test_utils::simple_client;
use crate::Item;
use crate::PdqError;
use monday::ColumnValue;
use monday::ColumnValues;
use serde_json::json;
use wiremock::MockServer;

const ITEMS: &str = r#"{"data":{"boards":[{"groups":[{"items":[
    {"id":"10","name":"Write docs"},
    {"id":"11","name":"Ship it"}
]}]}]}}"#;

#[tokio::test]
async fn get_items_of_a_group() {
    let server = MockServer::start().await;
    respond(&server, "groups%28ids%3A%22topics%22%29", ITEMS, 1).await;

    let items = simple_client(&server).get_items(1, "topics").await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].id().unwrap(), 11);
}

#[tokio::test]
async fn get_items_missing_group() {
    let server = MockServer::start().await;
    respond(&server, "groups", r#"{"data":{"boards":[{"groups":[]}]}}"#, 1).await;

    let err = simple_client(&server).get_items(1, "gone").await.unwrap_err();
    assert!(matches!(err, PdqError::NotFound { what: "group", .. }));
}

#[tokio::test]
async fn get_item_with_id() {
    let server = MockServer::start().await;
    respond(
        &server,
        "items%28ids%3A10%29",
        r#"{"data":{"items":[{"id":"10","name":"Write docs"}]}}"#,
        1,
    )
    .await;

    let item = simple_client(&server).get_item_with_id(10).await.unwrap();
    assert_eq!(item, Item { id: "10".into(), name: "Write docs".into() });
}

/// Verifies that each column value is decoded from its JSON string and that
/// empty columns come back as `None`.
#[tokio::test]
async fn get_item_column_values_decodes_each_value() {
    let server = MockServer::start().await;
    respond(
        &server,
        "column_values%7Bvalue%7D",
        r#"{"data":{"items":[{"column_values":[
            {"value":"{\"index\":1}"},
            {"value":null},
            {"value":"\"hello\""}
        ]}]}}"#,
        1,
    )
    .await;

    let values = simple_client(&server).get_item_column_values(10).await.unwrap();
    assert_eq!(
        values,
        vec![Some(json!({ "index": 1 })), None, Some(json!("hello"))],
    );
}

#[tokio::test]
async fn get_item_column_values_requires_values() {
    let server = MockServer::start().await;
    respond(&server, "column_values", r#"{"data":{"items":[{"column_values":[]}]}}"#, 1).await;

    let err = simple_client(&server).get_item_column_values(10).await.unwrap_err();
    assert!(matches!(err, PdqError::NotFound { what: "column values", .. }));
}

#[tokio::test]
async fn create_item_with_column_values_sends_them() {
    let server = MockServer::start().await;
    respond(
        &server,
        "column_values%3A%22%7B%5C%22text%5C%22%3A%5C%22hi%5C%22%7D%22",
        r#"{"data":{"create_item":{"id":"12","name":"New"}}}"#,
        1,
    )
    .await;

    let values = ColumnValues::from(ColumnValue::text("text", "hi"));
    let item = simple_client(&server)
        .create_item_with_column_values(1, "topics", "New", &values)
        .await
        .unwrap();
    assert_eq!(item.id, "12");
}

#[tokio::test]
async fn ensure_item_creates_on_miss() {
    let server = MockServer::start().await;
    respond(
        &server,
        "create_item",
        r#"{"data":{"create_item":{"id":"12","name":"New"}}}"#,
        1,
    )
    .await;
    respond(&server, "%7Bboards", ITEMS, 1).await;

    let (item, created) = simple_client(&server)
        .ensure_item(1, "topics", "New")
        .await
        .unwrap();
    assert!(created);
    assert_eq!(item.name, "New");
}

#[tokio::test]
async fn ensure_item_hit() {
    let server = MockServer::start().await;
    respond(&server, "create_item", "{}", 0).await;
    respond(&server, "%7Bboards", ITEMS, 1).await;

    let (item, created) = simple_client(&server)
        .ensure_item(1, "topics", "Ship it")
        .await
        .unwrap();
    assert!(!created);
    assert_eq!(item.id, "11");
}
