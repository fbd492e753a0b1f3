use crate::ast::AstNode;
use crate::ast::Selection;
use inherent::inherent;

/// One requested output element of a [`Selection`].
///
/// A field is either a scalar leaf (rendered as its bare name) or a
/// relationship carrying its own nested selection. A relationship renders as
/// the nested selection, whose name supplies the wire field name, so the two
/// must agree (see [`Selection::renamed`]).
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    name: &'static str,
    selection: Option<Box<Selection>>,
}
impl Field {
    pub const fn leaf(name: &'static str) -> Self {
        Self {
            name,
            selection: None,
        }
    }

    pub fn relationship(selection: Selection) -> Self {
        Self {
            name: selection.name(),
            selection: Some(Box::new(selection)),
        }
    }

    pub fn is_relationship(&self) -> bool {
        self.selection.is_some()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_deref()
    }
}

#[inherent]
impl AstNode for Field {
    pub fn to_wire(&self) -> String;

    pub fn append_wire(&self, sink: &mut String) {
        match &self.selection {
            Some(selection) => selection.append_wire(sink),
            None => sink.push_str(self.name),
        }
    }
}
