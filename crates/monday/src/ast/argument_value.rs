use crate::ast::ast_node::quote;

/// The value carried by an [`Argument`](crate::ast::Argument).
///
/// Every shape an argument can take is a variant here, so rendering is a total
/// match and never needs to inspect a value's runtime type.
#[derive(Clone, Debug, PartialEq)]
pub enum ArgumentValue {
    /// Rendered as `true` / `false`.
    Bool(bool),

    /// Rendered in decimal.
    Int(i64),

    /// Rendered verbatim, without quotes.
    Str(String),

    /// Rendered as a double-quoted string literal.
    ///
    /// Used for arguments that carry JSON payloads (`column_values`,
    /// `defaults`, ...), which the remote API expects as GraphQL strings.
    Quoted(String),

    /// The wire constant of an enum-like type (board kind, state, column
    /// type, ...), rendered verbatim.
    Enum(&'static str),

    /// A list of integer ids. Always rendered bare.
    IntList(Vec<i64>),

    /// A list of string ids. Always rendered quoted.
    StrList(Vec<String>),
}
impl ArgumentValue {
    /// Whether this value renders to nothing (an empty id list).
    pub fn is_omitted(&self) -> bool {
        match self {
            Self::IntList(ids) => ids.is_empty(),
            Self::StrList(ids) => ids.is_empty(),
            _ => false,
        }
    }

    /// Append the value's default textual form to `sink`.
    ///
    /// Lists of a single element fold to the bare element; longer lists use
    /// `[a,b,c]` with no spaces. Empty lists append nothing.
    pub(crate) fn append_default(&self, sink: &mut String) {
        match self {
            Self::Bool(value) => sink.push_str(if *value { "true" } else { "false" }),
            Self::Int(value) => sink.push_str(&value.to_string()),
            Self::Str(value) => sink.push_str(value),
            Self::Quoted(value) => sink.push_str(&quote(value)),
            Self::Enum(value) => sink.push_str(value),
            Self::IntList(ids) => append_list(
                sink,
                ids.iter().map(|id| id.to_string()),
                ids.len(),
            ),
            Self::StrList(ids) => append_list(
                sink,
                ids.iter().map(|id| quote(id)),
                ids.len(),
            ),
        }
    }

    /// Append the value as a quoted string literal regardless of variant.
    pub(crate) fn append_forced_quoted(&self, sink: &mut String) {
        let text = match self {
            Self::Str(value) | Self::Quoted(value) => value.to_owned(),
            Self::Enum(value) => (*value).to_owned(),
            other => {
                let mut plain = String::new();
                other.append_default(&mut plain);
                plain
            },
        };
        sink.push_str(&quote(&text));
    }
}

fn append_list(
    sink: &mut String,
    rendered: impl Iterator<Item = String>,
    len: usize,
) {
    match len {
        0 => (),
        1 => sink.extend(rendered),
        _ => {
            sink.push('[');
            sink.push_str(&rendered.collect::<Vec<_>>().join(","));
            sink.push(']');
        },
    }
}

impl From<bool> for ArgumentValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ArgumentValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for ArgumentValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for ArgumentValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<i64>> for ArgumentValue {
    fn from(value: Vec<i64>) -> Self {
        Self::IntList(value)
    }
}

impl From<Vec<String>> for ArgumentValue {
    fn from(value: Vec<String>) -> Self {
        Self::StrList(value)
    }
}
