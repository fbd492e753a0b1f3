use crate::PdqError;
use crate::SimpleClient;
use monday::entities::boards;
use monday::entities::boards::BoardsArgument;
use monday::entities::boards::BoardsField;
use monday::entities::groups;
use monday::entities::groups::GroupsArgument;
use monday::entities::groups::GroupsField;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Group {
    pub id: String,
    pub title: String,
}

#[derive(Deserialize)]
struct BoardGroups {
    boards: Vec<GroupList>,
}

#[derive(Deserialize)]
struct GroupList {
    groups: Vec<Group>,
}

#[derive(Deserialize)]
struct CreatedGroup {
    create_group: Group,
}

impl SimpleClient {
    pub async fn get_groups(&self, board_id: i64) -> Result<Vec<Group>, PdqError> {
        let (groups, _) = self.board_groups(board_id, vec![]).await?;
        Ok(groups)
    }

    pub async fn get_group_with_id(
        &self,
        board_id: i64,
        group_id: &str,
    ) -> Result<Group, PdqError> {
        let (mut groups, body) = self
            .board_groups(board_id, vec![GroupsArgument::ids(vec![group_id.to_owned()])])
            .await?;
        if groups.len() != 1 {
            return Err(PdqError::NotFound {
                what: "group",
                id: group_id.to_owned(),
                body,
            });
        }
        Ok(groups.remove(0))
    }

    pub async fn create_group(&self, board_id: i64, name: &str) -> Result<Group, PdqError> {
        let response = self
            .mutate::<CreatedGroup>(groups::create(
                board_id,
                name,
                vec![GroupsField::ID, GroupsField::TITLE],
            ))
            .await?;
        Ok(response.data.create_group)
    }

    /// Find the group titled `title` on a board, creating it when missing.
    pub async fn ensure_group(
        &self,
        board_id: i64,
        title: &str,
    ) -> Result<(Group, bool), PdqError> {
        if let Some(group) = self
            .get_groups(board_id)
            .await?
            .into_iter()
            .find(|group| group.title == title)
        {
            log::debug!("found group `{title}` ({}) on board {board_id}", group.id);
            return Ok((group, false));
        }
        log::debug!("creating group `{title}` on board {board_id}");
        Ok((self.create_group(board_id, title).await?, true))
    }

    /// The groups of one board, with the raw response body.
    async fn board_groups(
        &self,
        board_id: i64,
        args: Vec<GroupsArgument>,
    ) -> Result<(Vec<Group>, String), PdqError> {
        let response = self
            .query::<BoardGroups>(boards::list(
                vec![BoardsField::groups(vec![GroupsField::ID, GroupsField::TITLE], args)],
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
        Ok((boards.remove(0).groups, response.body))
    }
}
