use dioxus::prelude::*;

/// Surface container for page sections.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

/// Title row of a Card with an optional description and trailing actions.
#[component]
pub fn CardHeader(
    title: String,
    #[props(default)] description: String,
    children: Element,
) -> Element {
    rsx! {
        div { class: "card-header",
            div {
                h3 { class: "card-title", "{title}" }
                if !description.is_empty() {
                    p { class: "card-description", "{description}" }
                }
            }
            div { class: "card-action", {children} }
        }
    }
}

#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content", {children} }
    }
}

/// Headline figure on an overview page.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] hint: String,
    #[props(default = false)] loading: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "card stat-card",
            span { class: "stat-card-label", "{label}" }
            if loading {
                span { class: "stat-card-value stat-card-value-loading", "…" }
            } else {
                span { class: "stat-card-value", "{value}" }
            }
            if !hint.is_empty() {
                span { class: "stat-card-hint", "{hint}" }
            }
        }
    }
}
