use dioxus::prelude::*;

/// Horizontal bar showing one category's share of a total, used by the
/// analytics tables in place of charts.
#[component]
pub fn ProportionBar(label: String, count: usize, percent: f64) -> Element {
    let width = percent.clamp(0.0, 100.0);
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "proportion",
            div { class: "proportion-meta",
                span { class: "proportion-label", "{label}" }
                span { class: "proportion-count", "{count} ({width:.0}%)" }
            }
            div {
                class: "proportion-track",
                role: "progressbar",
                "aria-valuenow": "{width:.0}",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                div { class: "proportion-fill", style: "width: {width:.1}%" }
            }
        }
    }
}
