use crate::routes::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }
        div { class: "auth-page",
            div { class: "auth-card not-found",
                h1 { "Page not found" }
                p { "Nothing lives at /{path}." }
                Link { to: Route::Dashboard {}, class: "auth-link", "Back to the dashboard" }
            }
        }
    }
}
