/// The two kinds of root operation a [`Payload`](crate::operation::Payload)
/// can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationKind {
    Mutation,
    Query,
}
impl OperationKind {
    /// The keyword that opens this kind's block in a request.
    ///
    /// Queries use the anonymous shorthand, so their keyword is empty.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "",
        }
    }
}
