use crate::QueryCommand;
use crate::QueryOpts;
use monday::entities::boards;
use monday::entities::boards::BoardsArgument;
use monday::entities::boards::BoardsField;
use monday::Query;

#[derive(Debug, clap::Args)]
pub(crate) struct BoardsCmd {
    #[arg(
        help="Only list the board with this id. May be repeated.",
        long="id",
    )]
    pub ids: Vec<i64>,

    #[arg(
        help="Number of boards to list.",
        long,
    )]
    pub limit: Option<i64>,

    #[arg(
        help="Page of boards to list, starting at 1.",
        long,
    )]
    pub page: Option<i64>,

    #[command(flatten)]
    pub opts: QueryOpts,
}

#[inherent::inherent]
impl QueryCommand for BoardsCmd {
    pub fn opts(&self) -> &QueryOpts {
        &self.opts
    }

    pub fn queries(&self) -> Vec<Query> {
        let mut args = vec![BoardsArgument::ids(self.ids.clone())];
        args.extend(self.limit.map(BoardsArgument::limit));
        args.extend(self.page.map(BoardsArgument::page));

        vec![boards::list(
            vec![BoardsField::ID, BoardsField::NAME, BoardsField::STATE],
            args,
        )]
    }

    pub fn payload(&self) -> monday::Payload;
}
