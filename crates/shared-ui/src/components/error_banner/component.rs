use dioxus::prelude::*;

/// Inline failure notice with a retry action, shown in place of a list
/// whose last load failed.
#[component]
pub fn ErrorBanner(message: String, on_retry: EventHandler<()>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "error-banner", role: "alert",
            span { class: "error-banner-message", "{message}" }
            button {
                r#type: "button",
                class: "error-banner-retry",
                onclick: move |_| on_retry.call(()),
                "Retry"
            }
        }
    }
}
