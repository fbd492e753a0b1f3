use crate::PdqError;
use crate::SimpleClient;
use monday::entities::columns;
use monday::entities::items::ItemsField;
use monday::ColumnValue;

impl SimpleClient {
    /// Write `value` to its column of an item.
    pub async fn ensure_column_value(
        &self,
        board_id: i64,
        item_id: i64,
        value: &ColumnValue,
    ) -> Result<(), PdqError> {
        self.mutate::<serde_json::Value>(columns::change_value(
            item_id,
            board_id,
            value,
            vec![ItemsField::ID],
        ))
        .await?;
        Ok(())
    }
}
