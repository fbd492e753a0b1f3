use crate::ast::ArgumentValue;

/// The lifecycle states a board or item can be filtered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// Active, archived and deleted.
    All,
    /// Active only (the remote default).
    Active,
    Archived,
    Deleted,
}
impl State {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Archived => "archived",
            Self::Deleted => "deleted",
        }
    }
}
impl From<State> for ArgumentValue {
    fn from(state: State) -> Self {
        ArgumentValue::Enum(state.as_str())
    }
}
