mod boards;
mod me;

use boards::BoardsCmd;
use crate::QueryCommand;
use me::MeCmd;

#[derive(Debug, clap::Subcommand)]
pub(crate) enum CommandEnum {
    /// List boards.
    Boards(Box<BoardsCmd>),

    /// Show the user owning the API token.
    Me(Box<MeCmd>),
}
impl CommandEnum {
    pub(crate) fn as_query_command(&self) -> &dyn QueryCommand {
        match self {
            Self::Boards(cmd) => cmd.as_ref(),
            Self::Me(cmd) => cmd.as_ref(),
        }
    }
}
