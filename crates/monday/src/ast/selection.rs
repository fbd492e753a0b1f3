use crate::ast::ast_node::render_non_empty;
use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::Field;
use inherent::inherent;

/// A named selection: the root field (or mutation) name, the ordered fields
/// requested from it, and the ordered arguments passed to it.
///
/// Renders as `name(arg1,arg2){field1 field2}`, or `name{field1 field2}` when
/// no argument renders. A selection whose fields all render empty renders to
/// the empty string, which is how an optional relationship is left out of its
/// parent.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    arguments: Vec<Argument>,
    fields: Vec<Field>,
    name: &'static str,
}
impl Selection {
    pub fn new(
        name: &'static str,
        fields: Vec<Field>,
        arguments: Vec<Argument>,
    ) -> Self {
        Self {
            arguments,
            fields,
            name,
        }
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Return this selection with `argument` appended after any existing
    /// arguments.
    pub fn with_argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Return this selection under a different root name (e.g. a `users`
    /// list embedded as a board's `owner`).
    pub fn renamed(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
}

#[inherent]
impl AstNode for Selection {
    pub fn to_wire(&self) -> String;

    pub fn append_wire(&self, sink: &mut String) {
        let fields = render_non_empty(&self.fields);
        if fields.is_empty() {
            return;
        }

        sink.push_str(self.name);
        let arguments = render_non_empty(&self.arguments);
        if !arguments.is_empty() {
            sink.push('(');
            sink.push_str(&arguments.join(","));
            sink.push(')');
        }
        sink.push('{');
        sink.push_str(&fields.join(" "));
        sink.push('}');
    }
}
