use crate::simple_client::parse_id;
use crate::PdqError;
use crate::SimpleClient;
use monday::entities::boards;
use monday::entities::boards::BoardsArgument;
use monday::entities::boards::BoardsField;
use monday::entities::column_values::ColumnValuesField;
use monday::entities::groups::GroupsArgument;
use monday::entities::groups::GroupsField;
use monday::entities::items;
use monday::entities::items::ItemsArgument;
use monday::entities::items::ItemsField;
use monday::ColumnValues;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub name: String,
}
impl Item {
    pub fn id(&self) -> Result<i64, PdqError> {
        parse_id(&self.id)
    }
}

#[derive(Deserialize)]
struct BoardItems {
    boards: Vec<GroupItemsList>,
}

#[derive(Deserialize)]
struct GroupItemsList {
    groups: Vec<ItemList>,
}

#[derive(Deserialize)]
struct ItemList {
    items: Vec<Item>,
}

#[derive(Deserialize)]
struct ItemValues {
    items: Vec<ItemValueList>,
}

#[derive(Deserialize)]
struct ItemValueList {
    column_values: Vec<RawColumnValue>,
}

#[derive(Deserialize)]
struct RawColumnValue {
    value: Option<String>,
}

#[derive(Deserialize)]
struct CreatedItem {
    create_item: Item,
}

fn item_fields() -> Vec<ItemsField> {
    vec![ItemsField::ID, ItemsField::NAME]
}

impl SimpleClient {
    /// The items of one group of a board.
    pub async fn get_items(
        &self,
        board_id: i64,
        group_id: &str,
    ) -> Result<Vec<Item>, PdqError> {
        let response = self
            .query::<BoardItems>(boards::list(
                vec![BoardsField::groups(
                    vec![GroupsField::items(item_fields(), vec![])],
                    vec![GroupsArgument::ids(vec![group_id.to_owned()])],
                )],
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
        let mut groups = boards.remove(0).groups;
        if groups.len() != 1 {
            return Err(PdqError::NotFound {
                what: "group",
                id: group_id.to_owned(),
                body: response.body,
            });
        }
        Ok(groups.remove(0).items)
    }

    pub async fn get_item_with_id(&self, item_id: i64) -> Result<Item, PdqError> {
        let response = self
            .query::<ItemList>(items::list(
                item_fields(),
                vec![ItemsArgument::ids(vec![item_id])],
            ))
            .await?;
        let mut items = response.data.items;
        if items.len() != 1 {
            return Err(PdqError::NotFound {
                what: "item",
                id: item_id.to_string(),
                body: response.body,
            });
        }
        Ok(items.remove(0))
    }

    /// The decoded value of every column of an item, in board column order.
    ///
    /// A column without a value yields `None`.
    pub async fn get_item_column_values(
        &self,
        item_id: i64,
    ) -> Result<Vec<Option<serde_json::Value>>, PdqError> {
        let response = self
            .query::<ItemValues>(items::list(
                vec![ItemsField::column_values(vec![ColumnValuesField::VALUE], vec![])],
                vec![ItemsArgument::ids(vec![item_id])],
            ))
            .await?;
        let mut items = response.data.items;
        if items.len() != 1 {
            return Err(PdqError::NotFound {
                what: "item",
                id: item_id.to_string(),
                body: response.body,
            });
        }
        let values = items.remove(0).column_values;
        if values.is_empty() {
            return Err(PdqError::NotFound {
                what: "column values",
                id: item_id.to_string(),
                body: response.body,
            });
        }
        values
            .into_iter()
            .map(|raw| match raw.value.as_deref() {
                None | Some("") => Ok(None),
                Some(value) => serde_json::from_str(value)
                    .map(Some)
                    .map_err(|source| PdqError::Decode {
                        source,
                        body: value.to_owned(),
                    }),
            })
            .collect()
    }

    pub async fn create_item(
        &self,
        board_id: i64,
        group_id: &str,
        name: &str,
    ) -> Result<Item, PdqError> {
        self.create_item_with_column_values(board_id, group_id, name, &ColumnValues::new())
            .await
    }

    pub async fn create_item_with_column_values(
        &self,
        board_id: i64,
        group_id: &str,
        name: &str,
        values: &ColumnValues,
    ) -> Result<Item, PdqError> {
        let response = self
            .mutate::<CreatedItem>(items::create(
                board_id,
                group_id,
                name,
                values,
                item_fields(),
            ))
            .await?;
        Ok(response.data.create_item)
    }

    /// Find the item named `name` in a group, creating it when missing.
    pub async fn ensure_item(
        &self,
        board_id: i64,
        group_id: &str,
        name: &str,
    ) -> Result<(Item, bool), PdqError> {
        if let Some(item) = self
            .get_items(board_id, group_id)
            .await?
            .into_iter()
            .find(|item| item.name == name)
        {
            log::debug!(
                "found item `{name}` ({}) in group `{group_id}` of board {board_id}",
                item.id,
            );
            return Ok((item, false));
        }
        log::debug!("creating item `{name}` in group `{group_id}` of board {board_id}");
        Ok((self.create_item(board_id, group_id, name).await?, true))
    }
}
