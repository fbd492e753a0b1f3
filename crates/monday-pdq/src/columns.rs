use crate::PdqError;
use crate::SimpleClient;
use monday::entities::boards;
use monday::entities::boards::BoardsArgument;
use monday::entities::boards::BoardsField;
use monday::entities::columns;
use monday::entities::columns::ColumnType;
use monday::entities::columns::ColumnsField;
use serde::Deserialize;
use serde_json::json;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Column {
    pub id: String,
    pub title: String,
    #[serde(default, rename = "type")]
    pub column_type: Option<String>,
    /// The column's settings as a JSON document.
    #[serde(default)]
    pub settings_str: Option<String>,
}

#[derive(Deserialize)]
struct BoardColumns {
    boards: Vec<ColumnList>,
}

#[derive(Deserialize)]
struct ColumnList {
    columns: Vec<Column>,
}

#[derive(Deserialize)]
struct CreatedColumn {
    create_column: Column,
}

impl SimpleClient {
    pub async fn get_columns(&self, board_id: i64) -> Result<Vec<Column>, PdqError> {
        let response = self
            .query::<BoardColumns>(boards::list(
                vec![BoardsField::columns(vec![
                    ColumnsField::ID,
                    ColumnsField::TITLE,
                    ColumnsField::TYPE,
                    ColumnsField::SETTINGS_STR,
                ])],
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
        Ok(boards.remove(0).columns)
    }

    pub async fn get_column_with_id(
        &self,
        board_id: i64,
        column_id: &str,
    ) -> Result<Column, PdqError> {
        let columns = self.get_columns(board_id).await?;
        let count = columns.len();
        columns
            .into_iter()
            .find(|column| column.id == column_id)
            .ok_or_else(|| PdqError::NotFound {
                what: "column",
                id: column_id.to_owned(),
                body: format!("board {board_id} has {count} columns"),
            })
    }

    pub async fn create_column(
        &self,
        board_id: i64,
        title: &str,
        column_type: ColumnType,
    ) -> Result<Column, PdqError> {
        let response = self
            .mutate::<CreatedColumn>(columns::create(
                board_id,
                title,
                column_type,
                vec![ColumnsField::ID, ColumnsField::TITLE, ColumnsField::TYPE],
            ))
            .await?;
        Ok(response.data.create_column)
    }

    /// Create a status column offering `labels`.
    pub async fn create_status_column(
        &self,
        board_id: i64,
        title: &str,
        labels: &[&str],
    ) -> Result<Column, PdqError> {
        let defaults = json!({ "labels": labels }).to_string();
        let response = self
            .mutate::<CreatedColumn>(columns::create_with_defaults(
                board_id,
                title,
                ColumnType::Status,
                &defaults,
                vec![ColumnsField::ID, ColumnsField::TITLE],
            ))
            .await?;
        Ok(response.data.create_column)
    }

    /// Find the column titled `title` on a board, creating it when missing.
    pub async fn ensure_column(
        &self,
        board_id: i64,
        title: &str,
        column_type: ColumnType,
    ) -> Result<(Column, bool), PdqError> {
        if let Some(column) = self.find_column(board_id, title).await? {
            log::debug!("found column `{title}` ({}) on board {board_id}", column.id);
            return Ok((column, false));
        }
        log::debug!("creating {} column `{title}` on board {board_id}", column_type.as_str());
        Ok((self.create_column(board_id, title, column_type).await?, true))
    }

    /// Like [`SimpleClient::ensure_column`] for a status column. The labels of
    /// an existing column are left as they are.
    pub async fn ensure_status_column(
        &self,
        board_id: i64,
        title: &str,
        labels: &[&str],
    ) -> Result<(Column, bool), PdqError> {
        if let Some(column) = self.find_column(board_id, title).await? {
            log::debug!("found column `{title}` ({}) on board {board_id}", column.id);
            return Ok((column, false));
        }
        log::debug!("creating status column `{title}` on board {board_id}");
        Ok((self.create_status_column(board_id, title, labels).await?, true))
    }

    async fn find_column(
        &self,
        board_id: i64,
        title: &str,
    ) -> Result<Option<Column>, PdqError> {
        Ok(self
            .get_columns(board_id)
            .await?
            .into_iter()
            .find(|column| column.title == title))
    }
}
