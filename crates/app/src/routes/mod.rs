pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod pages;
pub mod register;

use dioxus::prelude::*;

use crate::session::use_session;
use dashboard::Dashboard;
use login::Login;
use not_found::NotFound;
use register::Register;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[layout(AuthGuard)]
    #[route("/")]
    Dashboard {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Sends visitors without a session to the login page. Waits for the stored
/// session to be read before deciding.
#[component]
fn AuthGuard() -> Element {
    let state = use_session();

    if !(state.restored)() {
        return rsx! {
            div { class: "auth-guard-loading",
                p { "Loading..." }
            }
        };
    }

    if state.session.read().is_none() {
        navigator().replace(Route::Login {});
        return rsx! {
            div { class: "auth-guard-loading",
                p { "Redirecting to login..." }
            }
        };
    }

    rsx! { Outlet::<Route> {} }
}
