use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::Field;
use crate::ast::Selection;
use crate::operation::OperationKind;
use crate::operation::OperationTrait;
use inherent::inherent;

/// A root query field together with its selection, e.g.
/// `boards(limit:1){id name}`.
///
/// Queries are immutable values: [`Query::with_argument`] and
/// [`Query::renamed`] consume the query and return a new one.
#[derive(Clone, Debug, PartialEq)]
pub struct Query(pub(crate) Selection);

#[inherent]
impl OperationTrait for Query {
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
        OperationKind::Query
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
impl Query {
    /// Embed this query as a relationship field of another selection.
    ///
    /// The query's name becomes the wire field name, so rename it first when
    /// the relationship is exposed under a different name.
    pub fn into_field(self) -> Field {
        Field::relationship(self.0)
    }
}

#[inherent]
impl AstNode for Query {
    pub fn to_wire(&self) -> String;

    pub fn append_wire(&self, sink: &mut String) {
        self.0.append_wire(sink);
    }
}
