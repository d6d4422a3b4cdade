use client::api::overview::load_overview;
use dioxus::prelude::*;
use shared_ui::{ErrorBanner, PageHeader, StatCard};

use crate::loader::use_loader;
use crate::session::{use_api, use_current_session};

#[component]
pub fn OverviewPage() -> Element {
    let session = use_current_session();
    let api = use_api();

    let first_name = session
        .display_name
        .split_whitespace()
        .next()
        .unwrap_or("there")
        .to_string();

    let overview = use_loader(move || {
        let api = api();
        let session = session.clone();
        async move { load_overview(&api, &session).await }
    });

    let cards = overview.items();
    let loading = overview.loading();

    rsx! {
        PageHeader {
            title: "Welcome back, {first_name}",
            description: "A summary of the records you can see.",
        }

        if let Some(err) = overview.error() {
            ErrorBanner { message: err, on_retry: move |_| overview.reload() }
        }

        div { class: "page-grid",
            if loading && cards.is_empty() {
                for i in 0..4 {
                    StatCard { key: "{i}", label: "Loading", value: "", loading: true }
                }
            } else {
                for card in cards {
                    StatCard { key: "{card.label}", label: card.label.to_string(), value: card.value }
                }
            }
        }
    }
}
