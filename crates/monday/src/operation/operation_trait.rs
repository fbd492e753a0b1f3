use crate::ast::Argument;
use crate::ast::Field;
use crate::ast::Selection;
use crate::operation::OperationKind;

// The accessors shared by `Query` and `Mutation`.
pub(super) trait OperationTrait where Self: Sized {
    fn new(
        name: &'static str,
        fields: Vec<Field>,
        arguments: Vec<Argument>,
    ) -> Self;
    fn arguments(&self) -> &[Argument];
    fn fields(&self) -> &[Field];
    fn kind(&self) -> OperationKind;
    fn name(&self) -> &'static str;
    fn renamed(self, name: &'static str) -> Self;
    fn selection(&self) -> &Selection;
    fn with_argument(self, argument: Argument) -> Self;
}
