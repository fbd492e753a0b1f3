/// Trait implemented by every node that has a wire (query-string) form.
///
/// All node types implement this trait via `#[inherent] impl AstNode`, giving
/// each node both inherent methods (no trait import needed) and a trait bound
/// for generic helpers.
///
/// A node may render to nothing at all: an empty id-list argument or a
/// selection without fields appends no text. Callers joining several nodes
/// must skip those empty renderings rather than emit a stray separator.
pub trait AstNode {
    /// Append this node's wire representation to `sink`.
    fn append_wire(&self, sink: &mut String);

    /// Return this node's wire representation as a new string.
    ///
    /// Convenience wrapper around [`append_wire`](AstNode::append_wire).
    fn to_wire(&self) -> String {
        let mut s = String::new();
        self.append_wire(&mut s);
        s
    }
}

/// Render each node and keep only the non-empty renderings, preserving order.
pub(crate) fn render_non_empty<'a, T: AstNode + 'a>(
    nodes: impl IntoIterator<Item = &'a T>,
) -> Vec<String> {
    nodes
        .into_iter()
        .map(AstNode::to_wire)
        .filter(|rendered| !rendered.is_empty())
        .collect()
}

/// Quote `value` as a double-quoted string literal using JSON escaping rules,
/// which GraphQL string literals accept verbatim.
pub(crate) fn quote(value: &str) -> String {
    serde_json::Value::String(value.to_owned()).to_string()
}
