use crate::simple_client::parse_id;
use crate::PdqError;
use crate::SimpleClient;
use monday::entities::boards;
use monday::entities::boards::BoardKind;
use monday::entities::boards::BoardsArgument;
use monday::entities::boards::BoardsField;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Board {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
impl Board {
    /// The numeric id, as expected by the `monday` constructors.
    pub fn id(&self) -> Result<i64, PdqError> {
        parse_id(&self.id)
    }
}

#[derive(Deserialize)]
struct BoardList {
    boards: Vec<Board>,
}

#[derive(Deserialize)]
struct CreatedBoard {
    create_board: Board,
}

fn board_fields() -> Vec<BoardsField> {
    vec![BoardsField::ID, BoardsField::NAME, BoardsField::DESCRIPTION]
}

impl SimpleClient {
    pub async fn get_boards(&self) -> Result<Vec<Board>, PdqError> {
        let response = self
            .query::<BoardList>(boards::list(board_fields(), vec![]))
            .await?;
        Ok(response.data.boards)
    }

    pub async fn get_board_with_id(&self, board_id: i64) -> Result<Board, PdqError> {
        let response = self
            .query::<BoardList>(boards::list(
                board_fields(),
                vec![BoardsArgument::ids(vec![board_id])],
            ))
            .await?;
        let mut boards = response.data.boards;
        if boards.len() != 1 {
            return Err(PdqError::NotFound {
                what: "board",
                id: board_id.to_string(),
                body: response.body,
            });
        }
        Ok(boards.remove(0))
    }

    /// Create a public board.
    pub async fn create_board(&self, name: &str) -> Result<Board, PdqError> {
        let response = self
            .mutate::<CreatedBoard>(boards::create(
                name,
                BoardKind::Public,
                vec![BoardsField::ID, BoardsField::NAME],
            ))
            .await?;
        Ok(response.data.create_board)
    }

    /// Find a board named `name`, creating a public one when there is none.
    pub async fn ensure_board(&self, name: &str) -> Result<(Board, bool), PdqError> {
        if let Some(board) = self
            .get_boards()
            .await?
            .into_iter()
            .find(|board| board.name == name)
        {
            log::debug!("found board `{name}` ({})", board.id);
            return Ok((board, false));
        }
        log::debug!("creating board `{name}`");
        Ok((self.create_board(name).await?, true))
    }
}
