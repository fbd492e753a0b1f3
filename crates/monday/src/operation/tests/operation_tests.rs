use crate::ast::Argument;
use crate::ast::Field;
use crate::operation::Mutation;
use crate::operation::OperationKind;
use crate::operation::Query;

#[test]
fn query_and_mutation_report_their_kind() {
    let query = Query::new("boards", vec![Field::leaf("id")], vec![]);
    let mutation = Mutation::new("archive_board", vec![Field::leaf("id")], vec![]);
    assert_eq!(query.kind(), OperationKind::Query);
    assert_eq!(mutation.kind(), OperationKind::Mutation);
    assert_eq!(OperationKind::Query.keyword(), "");
    assert_eq!(OperationKind::Mutation.keyword(), "mutation");
}

/// Verifies that deriving a new operation leaves the original value
/// untouched.
#[test]
fn derived_operations_are_independent_values() {
    let base = Mutation::new(
        "create_board",
        vec![Field::leaf("id")],
        vec![Argument::new("board_name", "x")],
    );
    let derived = base.clone().with_argument(Argument::new("template_id", 1_i64));
    assert_eq!(base.arguments().len(), 1);
    assert_eq!(derived.arguments().len(), 2);
    assert_eq!(base.to_wire(), "create_board(board_name:x){id}");
    assert_eq!(derived.to_wire(), "create_board(board_name:x,template_id:1){id}");
}

#[test]
fn renamed_query_becomes_the_field_name() {
    let subscribers = Query::new("users", vec![Field::leaf("id")], vec![])
        .renamed("subscribers");
    assert_eq!(subscribers.name(), "subscribers");

    let field = subscribers.into_field();
    assert_eq!(field.name(), "subscribers");
    assert_eq!(field.to_wire(), "subscribers{id}");
}
