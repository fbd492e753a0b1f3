use crate::ast::Argument;
use crate::ast::Field;
use crate::operation::Mutation;
use crate::operation::Payload;
use crate::operation::Query;

fn boards() -> Query {
    Query::new("boards", vec![Field::leaf("id")], vec![])
}

fn archive() -> Mutation {
    Mutation::new(
        "archive_board",
        vec![Field::leaf("id")],
        vec![Argument::new("board_id", 1_i64)],
    )
}

#[test]
fn queries_only() {
    let payload = Payload::queries([boards(), boards().renamed("me")]);
    assert_eq!(payload.to_wire(), "{boards{id}me{id}}");
}

#[test]
fn mutations_only() {
    let payload = Payload::mutations([archive()]);
    assert_eq!(payload.to_wire(), "mutation{archive_board(board_id:1){id}}");
}

/// Verifies that both blocks are emitted back to back, queries first, with no
/// separator between them.
#[test]
fn queries_then_mutations() {
    let payload = Payload::new()
        .add_mutation(archive())
        .add_query(boards());
    assert_eq!(
        payload.to_wire(),
        "{boards{id}}mutation{archive_board(board_id:1){id}}",
    );
    assert_eq!(payload.query_list().len(), 1);
    assert_eq!(payload.mutation_list().len(), 1);
}

#[test]
fn empty_members_are_skipped() {
    let empty = Query::new("tags", vec![], vec![]);
    let payload = Payload::queries([empty.clone(), boards(), empty]);
    assert_eq!(payload.to_wire(), "{boards{id}}");
}

/// Verifies that a payload of only empty members renders the empty string,
/// with neither block emitted.
#[test]
fn only_empty_members_render_nothing() {
    let payload = Payload::new()
        .add_query(Query::new("boards", vec![], vec![]))
        .add_mutation(Mutation::new("archive_board", vec![], vec![]));
    assert_eq!(payload.to_wire(), "");
    assert!(payload.is_empty());
    assert!(Payload::new().is_empty());
}
