use crate::QueryCommand;
use crate::QueryOpts;
use monday::entities::users;
use monday::entities::users::UsersField;
use monday::Query;

#[derive(Debug, clap::Args)]
pub(crate) struct MeCmd {
    #[command(flatten)]
    pub opts: QueryOpts,
}

#[inherent::inherent]
impl QueryCommand for MeCmd {
    pub fn opts(&self) -> &QueryOpts {
        &self.opts
    }

    pub fn queries(&self) -> Vec<Query> {
        vec![users::me(
            vec![UsersField::ID, UsersField::NAME, UsersField::EMAIL],
            vec![],
        )]
    }

    pub fn payload(&self) -> monday::Payload;
}
