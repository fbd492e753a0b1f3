use crate::entities::boards;
use crate::entities::boards::BoardKind;
use crate::entities::boards::BoardsArgument;
use crate::entities::boards::BoardsField;
use crate::entities::columns;
use crate::entities::columns::ColumnsField;
use crate::entities::groups;
use crate::entities::groups::GroupsArgument;
use crate::entities::groups::GroupsField;
use crate::entities::state::State;

#[test]
fn boards_default_to_id() {
    assert_eq!(boards::list(vec![], vec![]).to_wire(), "boards{id}");
}

#[test]
fn boards_with_every_argument() {
    let query = boards::list(
        vec![],
        vec![
            BoardsArgument::ids(vec![1]),
            BoardsArgument::page(1),
            BoardsArgument::limit(1),
            BoardsArgument::state(State::All),
            BoardsArgument::kind(BoardKind::Public),
            BoardsArgument::newest_first(true),
        ],
    );
    assert_eq!(
        query.to_wire(),
        "boards(ids:1,page:1,limit:1,state:all,board_kind:public,newest_first:true){id}",
    );
}

#[test]
fn boards_id_list_folding() {
    let wire = |ids: Vec<i64>| {
        boards::list(vec![], vec![BoardsArgument::ids(ids)]).to_wire()
    };
    assert_eq!(wire(vec![5]), "boards(ids:5){id}");
    assert_eq!(wire(vec![5, 6, 7]), "boards(ids:[5,6,7]){id}");
    assert_eq!(wire(vec![]), "boards{id}");
}

/// Verifies that relationship fields default to their own `id` selection and
/// keep the order they were given in.
#[test]
fn boards_relationships_default_to_id() {
    let query = boards::list(
        vec![
            BoardsField::ID,
            BoardsField::POS,
            BoardsField::NAME,
            BoardsField::tags(vec![], vec![]),
            BoardsField::items(vec![], vec![]),
            BoardsField::owner(vec![], vec![]),
            BoardsField::STATE,
            BoardsField::groups(vec![], vec![]),
            BoardsField::columns(vec![]),
        ],
        vec![],
    );
    assert_eq!(
        query.to_wire(),
        "boards{id pos name tags{id} items{id} owner{id} state groups{id} columns{id}}",
    );
}

#[test]
fn boards_remaining_fields() {
    let query = boards::list(
        vec![
            BoardsField::updates(vec![], vec![]),
            BoardsField::BOARD_KIND,
            BoardsField::DESCRIPTION,
            BoardsField::PERMISSIONS,
            BoardsField::subscribers(vec![], vec![]),
            BoardsField::BOARD_FOLDER_ID,
        ],
        vec![],
    );
    assert_eq!(
        query.to_wire(),
        "boards{updates{id} board_kind description permissions subscribers{id} board_folder_id}",
    );
}

#[test]
fn boards_nested_column_selection() {
    let query = boards::list(
        vec![BoardsField::columns(vec![ColumnsField::TITLE])],
        vec![],
    );
    assert_eq!(query.to_wire(), "boards{columns{title}}");
}

#[test]
fn columns_fields() {
    assert_eq!(columns::list(vec![]).to_wire(), "columns{id}");
    let query = columns::list(vec![
        ColumnsField::ID,
        ColumnsField::TYPE,
        ColumnsField::TITLE,
        ColumnsField::WIDTH,
        ColumnsField::ARCHIVED,
        ColumnsField::SETTINGS_STR,
    ]);
    assert_eq!(query.to_wire(), "columns{id type title width archived settings_str}");
}

#[test]
fn groups_arguments_and_fields() {
    assert_eq!(groups::list(vec![], vec![]).to_wire(), "groups{id}");

    let query = groups::list(
        vec![],
        vec![GroupsArgument::ids(vec!["x".to_string(), "y".to_string()])],
    );
    assert_eq!(query.to_wire(), r#"groups(ids:["x","y"]){id}"#);

    let query = groups::list(
        vec![
            GroupsField::ID,
            GroupsField::COLOR,
            GroupsField::items(vec![], vec![]),
            GroupsField::TITLE,
            GroupsField::DELETED,
            GroupsField::ARCHIVED,
            GroupsField::POSITION,
        ],
        vec![],
    );
    assert_eq!(
        query.to_wire(),
        "groups{id color items{id} title deleted archived position}",
    );
}

#[test]
fn board_kinds_render_their_constant() {
    let wire = |kind| boards::list(vec![], vec![BoardsArgument::kind(kind)]).to_wire();
    assert_eq!(wire(BoardKind::Public), "boards(board_kind:public){id}");
    assert_eq!(wire(BoardKind::Private), "boards(board_kind:private){id}");
    assert_eq!(wire(BoardKind::Share), "boards(board_kind:share){id}");
}
