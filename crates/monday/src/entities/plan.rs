use crate::ast::Field;
use crate::entities::selector;

selector! {
    /// A field of an account's payment plan.
    PlanField(Field)
}
impl PlanField {
    /// The maximum users allowed in the plan.
    pub const MAX_USERS: Self = Self(Field::leaf("max_users"));
    /// The plan's time period.
    pub const PERIOD: Self = Self(Field::leaf("period"));
    /// The plan's tier.
    pub const TIER: Self = Self(Field::leaf("tier"));
    /// The plan's version.
    pub const VERSION: Self = Self(Field::leaf("version"));
}
