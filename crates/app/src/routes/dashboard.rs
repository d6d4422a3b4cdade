use crate::controller::{
    AdminPage, AssessorPage, DashboardPage, FarmerPage, GovernmentPage, InsurerPage,
    PageController,
};
use crate::routes::Route;
use crate::session::{use_current_session, use_session};
use crate::shell::DashboardShell;
use dioxus::prelude::*;
use shared_types::{FeatureFlags, UserRole};

/// Role dashboard for the signed-in user.
#[component]
pub fn Dashboard() -> Element {
    let session = use_current_session();
    match session.role {
        UserRole::Admin => rsx! { AdminDashboard {} },
        UserRole::Farmer => rsx! { FarmerDashboard {} },
        UserRole::Government => rsx! { GovernmentDashboard {} },
        UserRole::Insurer => rsx! { InsurerDashboard {} },
        UserRole::Assessor => rsx! { AssessorDashboard {} },
    }
}

#[component]
fn AdminDashboard() -> Element {
    role_dashboard::<AdminPage>()
}

#[component]
fn FarmerDashboard() -> Element {
    role_dashboard::<FarmerPage>()
}

#[component]
fn GovernmentDashboard() -> Element {
    role_dashboard::<GovernmentPage>()
}

#[component]
fn InsurerDashboard() -> Element {
    role_dashboard::<InsurerPage>()
}

#[component]
fn AssessorDashboard() -> Element {
    role_dashboard::<AssessorPage>()
}

/// Shell plus the active page of `P`'s controller.
fn role_dashboard<P: DashboardPage + std::fmt::Debug>() -> Element {
    let flags: FeatureFlags = use_context();
    let mut state = use_session();
    let session = use_current_session();
    let mut controller = use_signal(|| PageController::<P>::new(flags));

    let nav_items = controller.read().nav_items();
    let entry = controller.read().entry();

    rsx! {
        DashboardShell {
            nav_items,
            active_page: entry.id.to_string(),
            role: session.role,
            display_name: session.display_name.clone(),
            on_page_change: move |id: String| {
                if !controller.write().select_id(&id) {
                    tracing::debug!(page = %id, "ignored navigation to unknown page");
                }
            },
            on_logout: move |_| {
                tracing::info!("signed out");
                state.sign_out();
                navigator().replace(Route::Login {});
            },
            PageHost { key: "{entry.id}", render: entry.render }
        }
    }
}

/// Mounts one page. Keyed by page id so switching pages remounts it and
/// the new page's loaders start fresh.
#[component]
fn PageHost(render: fn() -> Element) -> Element {
    render()
}
