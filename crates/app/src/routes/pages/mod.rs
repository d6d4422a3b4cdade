//! Dashboard pages. Each page owns its loaders and renders in isolation;
//! role differences come from the signed-in [`Session`].

mod analytics;
mod assessments;
mod claims;
mod farms;
mod issue_policy;
mod overview;
mod policies;
mod settings;
mod users;

pub use analytics::AnalyticsPage;
pub use assessments::AssessmentsPage;
pub use claims::ClaimsPage;
pub use farms::FarmsPage;
pub use overview::OverviewPage;
pub use policies::PoliciesPage;
pub use settings::SettingsPage;
pub use users::UsersPage;

use shared_types::{AppError, Session, UserRole};
use shared_ui::{toast_error, SelectOption, Toasts};
use std::collections::HashMap;

/// Admins and insurers change policy status and issue policies.
pub(crate) fn can_manage_policies(role: UserRole) -> bool {
    matches!(role, UserRole::Admin | UserRole::Insurer)
}

/// Admins and insurers approve, reject or start processing claims.
pub(crate) fn can_review_claims(role: UserRole) -> bool {
    matches!(role, UserRole::Admin | UserRole::Insurer)
}

/// Farmers only ever see their own records.
pub(crate) fn farmer_scope(session: &Session) -> Option<String> {
    (session.role == UserRole::Farmer).then(|| session.user_id.clone())
}

/// Select options for status keys, labelled in title case.
pub(crate) fn status_options<'a>(keys: impl IntoIterator<Item = &'a str>) -> Vec<SelectOption> {
    keys.into_iter()
        .map(|k| SelectOption::new(k, crate::format_helpers::format_snake_case_title(k)))
        .collect()
}

/// What a rejected form submission shows: a toast with the error message
/// and the per-field messages for inline display.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FormFeedback {
    pub toast: String,
    pub fields: HashMap<String, String>,
}

impl From<AppError> for FormFeedback {
    fn from(err: AppError) -> Self {
        Self {
            toast: err.friendly_message(),
            fields: err.field_errors,
        }
    }
}

impl FormFeedback {
    /// Raise the toast and hand back the field messages.
    pub fn show(self, toasts: &Toasts) -> HashMap<String, String> {
        toast_error(toasts, &self.toast);
        self.fields
    }
}
