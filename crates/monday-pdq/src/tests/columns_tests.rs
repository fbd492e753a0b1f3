use crate::tests::test_utils::respond;
use crate::tests::test_utils::simple_client;
use crate::PdqError;
use monday::entities::columns::ColumnType;
use wiremock::MockServer;

const COLUMNS: &str = r#"{"data":{"boards":[{"columns":[
    {"id":"name","title":"Name","type":"name","settings_str":"{}"},
    {"id":"status","title":"Status","type":"color","settings_str":"{\"labels\":{}}"}
]}]}}"#;

#[tokio::test]
async fn get_columns_of_a_board() {
    let server = MockServer::start().await;
    respond(&server, "columns", COLUMNS, 1).await;

    let columns = simple_client(&server).get_columns(1).await.unwrap();
    assert_eq!(columns.len(), 2);
    assert_eq!(columns[1].column_type.as_deref(), Some("color"));
    assert_eq!(columns[1].settings_str.as_deref(), Some(r#"{"labels":{}}"#));
}

#[tokio::test]
async fn get_column_with_id() {
    let server = MockServer::start().await;
    respond(&server, "columns", COLUMNS, 2).await;

    let client = simple_client(&server);
    assert_eq!(client.get_column_with_id(1, "status").await.unwrap().title, "Status");
    assert!(matches!(
        client.get_column_with_id(1, "date").await,
        Err(PdqError::NotFound { what: "column", .. }),
    ));
}

/// Verifies that a missing column is created with the requested type, sent
/// as a quoted string.
#[tokio::test]
async fn ensure_column_creates_on_miss() {
    let server = MockServer::start().await;
    respond(
        &server,
        "column_type%3A%22date%22",
        r#"{"data":{"create_column":{"id":"date4","title":"Due","type":"date"}}}"#,
        1,
    )
    .await;
    respond(&server, "%7Bboards", COLUMNS, 1).await;

    let (column, created) = simple_client(&server)
        .ensure_column(1, "Due", ColumnType::Date)
        .await
        .unwrap();
    assert!(created);
    assert_eq!(column.id, "date4");
}

#[tokio::test]
async fn ensure_status_column_sends_label_defaults() {
    let server = MockServer::start().await;
    // defaults:"{\"labels\":[\"Open\",\"Closed\"]}", form-encoded.
    respond(
        &server,
        "defaults%3A%22%7B%5C%22labels%5C%22%3A%5B%5C%22Open%5C%22%2C%5C%22Closed%5C%22%5D%7D%22",
        r#"{"data":{"create_column":{"id":"status7","title":"State"}}}"#,
        1,
    )
    .await;
    respond(&server, "%7Bboards", COLUMNS, 1).await;

    let (column, created) = simple_client(&server)
        .ensure_status_column(1, "State", &["Open", "Closed"])
        .await
        .unwrap();
    assert!(created);
    assert_eq!(column.id, "status7");
    assert_eq!(column.column_type, None);
}

#[tokio::test]
async fn ensure_status_column_hit_keeps_existing_column() {
    let server = MockServer::start().await;
    respond(&server, "create_column", "{}", 0).await;
    respond(&server, "%7Bboards", COLUMNS, 1).await;

    let (column, created) = simple_client(&server)
        .ensure_status_column(1, "Status", &["Open"])
        .await
        .unwrap();
    assert!(!created);
    assert_eq!(column.id, "status");
}
