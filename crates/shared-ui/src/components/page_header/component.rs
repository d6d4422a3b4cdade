use dioxus::prelude::*;

/// Title block at the top of each dashboard page. Children render as
/// right-aligned actions.
#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] description: String,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            div {
                h1 { class: "page-title", "{title}" }
                if !description.is_empty() {
                    p { class: "page-description", "{description}" }
                }
            }
            div { class: "page-actions", {children} }
        }
    }
}
