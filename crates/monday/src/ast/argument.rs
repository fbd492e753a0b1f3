use crate::ast::AstNode;
use crate::ast::ArgumentValue;
use inherent::inherent;

/// Argument names whose values the remote API only accepts as string
/// literals, whatever the shape of the value.
const ALWAYS_QUOTED: [&str; 3] = ["column_id", "column_type", "column_value"];

/// A single named input to a selection, rendered inline as `name:value`.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    name: &'static str,
    value: ArgumentValue,
}
impl Argument {
    pub fn new(name: &'static str, value: impl Into<ArgumentValue>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }

    /// Shorthand for an argument carrying an [`ArgumentValue::Quoted`]
    /// string.
    pub fn quoted(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: ArgumentValue::Quoted(value.into()),
        }
    }

    /// Whether this argument renders to nothing and must be left out of the
    /// argument list.
    pub fn is_omitted(&self) -> bool {
        self.value.is_omitted()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self) -> &ArgumentValue {
        &self.value
    }
}

#[inherent]
impl AstNode for Argument {
    pub fn to_wire(&self) -> String;

    pub fn append_wire(&self, sink: &mut String) {
        if self.is_omitted() {
            return;
        }
        sink.push_str(self.name);
        sink.push(':');
        if ALWAYS_QUOTED.contains(&self.name) {
            self.value.append_forced_quoted(sink);
        } else {
            self.value.append_default(sink);
        }
    }
}
