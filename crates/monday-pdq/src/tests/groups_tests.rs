use crate::tests::test_utils::respond;
use crate::tests::test_utils::simple_client;
use crate::Group;
use crate::PdqError;
use wiremock::MockServer;

const GROUPS: &str = r#"{"data":{"boards":[{"groups":[
    {"id":"topics","title":"Topics"},
    {"id":"done","title":"Done"}
]}]}}"#;

#[tokio::test]
async fn get_groups_of_a_board() {
    let server = MockServer::start().await;
    respond(&server, "ids%3A4", GROUPS, 1).await;

    let groups = simple_client(&server).get_groups(4).await.unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0], Group { id: "topics".into(), title: "Topics".into() });
}

/// Verifies that the group id filter is sent quoted.
#[tokio::test]
async fn get_group_with_id_filters_by_quoted_id() {
    let server = MockServer::start().await;
    respond(
        &server,
        "groups%28ids%3A%22done%22%29",
        r#"{"data":{"boards":[{"groups":[{"id":"done","title":"Done"}]}]}}"#,
        1,
    )
    .await;

    let group = simple_client(&server).get_group_with_id(4, "done").await.unwrap();
    assert_eq!(group.title, "Done");
}

#[tokio::test]
async fn get_group_with_id_missing() {
    let server = MockServer::start().await;
    respond(&server, "groups", r#"{"data":{"boards":[{"groups":[]}]}}"#, 1).await;

    let err = simple_client(&server).get_group_with_id(4, "nope").await.unwrap_err();
    assert!(matches!(err, PdqError::NotFound { what: "group", .. }));
}

#[tokio::test]
async fn ensure_group_creates_on_miss() {
    let server = MockServer::start().await;
    respond(
        &server,
        "create_group",
        r#"{"data":{"create_group":{"id":"new_group","title":"Later"}}}"#,
        1,
    )
    .await;
    respond(&server, "%7Bboards", GROUPS, 1).await;

    let (group, created) = simple_client(&server).ensure_group(4, "Later").await.unwrap();
    assert!(created);
    assert_eq!(group.id, "new_group");
}

#[tokio::test]
async fn ensure_group_hit() {
    let server = MockServer::start().await;
    respond(&server, "create_group", "{}", 0).await;
    respond(&server, "%7Bboards", GROUPS, 1).await;

    let (group, created) = simple_client(&server).ensure_group(4, "Done").await.unwrap();
    assert!(!created);
    assert_eq!(group.id, "done");
}
