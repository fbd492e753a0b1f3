use monday::entities::complexity;
use monday::Payload;
use monday::Query;

/// Flags shared by every subcommand.
#[derive(Debug, Default, clap::Args)]
pub(crate) struct QueryOpts {
    #[arg(
        help="Print the query string instead of sending it.",
        long,
    )]
    pub dry_run: bool,

    #[arg(
        help="Also report the complexity budget the query consumed.",
        long,
    )]
    pub with_complexity: bool,
}

/// A subcommand that renders to the queries of a single request.
pub(crate) trait QueryCommand: std::fmt::Debug {
    fn opts(&self) -> &QueryOpts;

    fn queries(&self) -> Vec<Query>;

    /// The request to send, with the complexity query appended when asked
    /// for.
    fn payload(&self) -> Payload {
        let payload = Payload::queries(self.queries());
        if self.opts().with_complexity {
            payload.add_query(complexity::get(vec![]))
        } else {
            payload
        }
    }
}
