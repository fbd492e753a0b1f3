//! The connected account (the organization owning the API token).

use crate::ast::Field;
use crate::entities::fields_or;
use crate::entities::fields_or_id;
use crate::entities::plan::PlanField;
use crate::entities::selector;
use crate::operation::Query;

/// The connected account's information. Defaults to `id`.
pub fn get(fields: Vec<AccountField>) -> Query {
    Query::new("account", fields_or_id(fields), vec![])
}

selector! {
    AccountField(Field)
}
impl AccountField {
    /// The first day of the week for the account (sunday / monday).
    pub const FIRST_DAY_OF_THE_WEEK: Self = Self(Field::leaf("first_day_of_the_week"));
    pub const ID: Self = Self(Field::leaf("id"));
    pub const LOGO: Self = Self(Field::leaf("logo"));
    pub const NAME: Self = Self(Field::leaf("name"));
    /// Show weekends in timeline.
    pub const SHOW_TIMELINE_WEEKENDS: Self = Self(Field::leaf("show_timeline_weekends"));
    pub const SLUG: Self = Self(Field::leaf("slug"));

    /// The account's payment plan. Defaults to every plan field.
    pub fn plan(fields: Vec<PlanField>) -> Self {
        let fields = fields_or(fields, || vec![
            PlanField::MAX_USERS.into(),
            PlanField::PERIOD.into(),
            PlanField::TIER.into(),
            PlanField::VERSION.into(),
        ]);
        Self(Query::new("plan", fields, vec![]).into_field())
    }
}
