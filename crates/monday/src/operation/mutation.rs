use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::Field;
use crate::ast::Selection;
use crate::operation::OperationKind;
use crate::operation::OperationTrait;
use inherent::inherent;

/// A mutation call together with the selection of its result, e.g.
/// `create_group(board_id:1,group_name:Backlog){id}`.
///
/// Constructors of derived mutations (a board from a template, a group
/// duplicate with a new title) build the base mutation and append one more
/// argument with [`Mutation::with_argument`].
#[derive(Clone, Debug, PartialEq)]
pub struct Mutation(pub(crate) Selection);

#[inherent]
impl OperationTrait for Mutation {
    pub fn new(
        name: &'static str,
        fields: Vec<Field>,
        arguments: Vec<Argument>,
    ) -> Self {
        Self(Selection::new(name, fields, arguments))
    }

    pub fn arguments(&self) -> &[Argument] {
        self.0.arguments()
    }

    pub fn fields(&self) -> &[Field] {
        self.0.fields()
    }

    pub fn kind(&self) -> OperationKind {
        OperationKind::Mutation
    }

    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    pub fn renamed(self, name: &'static str) -> Self {
        Self(self.0.renamed(name))
    }

    pub fn selection(&self) -> &Selection {
        &self.0
    }

    pub fn with_argument(self, argument: Argument) -> Self {
        Self(self.0.with_argument(argument))
    }
}

#[inherent]
impl AstNode for Mutation {
    pub fn to_wire(&self) -> String;

    pub fn append_wire(&self, sink: &mut String) {
        self.0.append_wire(sink);
    }
}
