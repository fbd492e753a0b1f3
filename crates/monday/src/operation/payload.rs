use crate::ast::ast_node::render_non_empty;
use crate::ast::AstNode;
use crate::operation::Mutation;
use crate::operation::OperationKind;
use crate::operation::Query;
use inherent::inherent;

/// One request's worth of queries and mutations.
///
/// The wire form is a `{...}` block holding every query followed by a
/// `mutation{...}` block holding every mutation. Members render back to back
/// with no separator, members that render empty are skipped, and a block with
/// no remaining members is left out entirely.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Payload {
    mutations: Vec<Mutation>,
    queries: Vec<Query>,
}
impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// A payload holding only the given queries.
    pub fn queries(queries: impl IntoIterator<Item = Query>) -> Self {
        Self {
            mutations: vec![],
            queries: queries.into_iter().collect(),
        }
    }

    /// A payload holding only the given mutations.
    pub fn mutations(mutations: impl IntoIterator<Item = Mutation>) -> Self {
        Self {
            mutations: mutations.into_iter().collect(),
            queries: vec![],
        }
    }

    /// Add a [`Mutation`] after any previously added `Mutation`s.
    pub fn add_mutation(mut self, mutation: Mutation) -> Self {
        self.mutations.push(mutation);
        self
    }

    /// Add a [`Query`] after any previously added `Query`s.
    pub fn add_query(mut self, query: Query) -> Self {
        self.queries.push(query);
        self
    }

    /// Whether this payload renders to the empty string.
    pub fn is_empty(&self) -> bool {
        self.to_wire().is_empty()
    }

    pub fn mutation_list(&self) -> &[Mutation] {
        &self.mutations
    }

    pub fn query_list(&self) -> &[Query] {
        &self.queries
    }
}

fn append_block(sink: &mut String, kind: OperationKind, members: Vec<String>) {
    if members.is_empty() {
        return;
    }
    sink.push_str(kind.keyword());
    sink.push('{');
    members.iter().for_each(|member| sink.push_str(member));
    sink.push('}');
}

#[inherent]
impl AstNode for Payload {
    pub fn to_wire(&self) -> String;

    pub fn append_wire(&self, sink: &mut String) {
        append_block(sink, OperationKind::Query, render_non_empty(&self.queries));
        append_block(
            sink,
            OperationKind::Mutation,
            render_non_empty(&self.mutations),
        );
    }
}
