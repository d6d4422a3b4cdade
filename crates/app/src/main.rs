use client::ApiClient;
use dioxus::prelude::*;

mod config;
mod controller;
mod format_helpers;
mod loader;
mod routes;
mod session;
mod shell;

use routes::Route;
use session::{load_persisted, SessionState};

const BASE_CSS: Asset = asset!("/assets/base.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(config::load_config);
    use_context_provider(|| config.features.clone());
    use_context_provider(|| config.clone());

    let mut state = use_context_provider(SessionState::new);

    // Restore the stored session once; guards wait on `restored`.
    use_future(move || async move {
        if let Some(session) = load_persisted().await {
            tracing::info!(role = session.role.as_str(), "restored session");
            state.session.set(Some(session));
        }
        state.restored.set(true);
    });

    // Re-derived whenever the session changes so every request carries the
    // current bearer token.
    let base = use_hook(|| ApiClient::new(config.api.base_url.clone()));
    let api = use_memo(move || {
        let token = state.session.read().as_ref().map(|s| s.token.clone());
        base.with_token(token)
    });
    use_context_provider(|| api);

    rsx! {
        document::Link { rel: "stylesheet", href: BASE_CSS }
        document::Title { "Crop Cover" }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
