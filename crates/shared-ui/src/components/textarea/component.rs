use dioxus::prelude::*;

/// Labelled multi-line input with an inline validation message.
#[component]
pub fn TextAreaField(
    label: String,
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] placeholder: String,
    #[props(default = 4)] rows: u32,
    #[props(default)] hint: String,
    #[props(default)] error: Option<String>,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "field",
            span { class: "field-label", "{label}" }
            textarea {
                class: "textarea",
                rows: "{rows}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                "aria-invalid": if error.is_some() { "true" } else { "false" },
                oninput: move |evt| on_input.call(evt.value()),
            }
            if !hint.is_empty() {
                span { class: "field-hint", "{hint}" }
            }
            if let Some(message) = error {
                span { class: "field-error", role: "alert", "{message}" }
            }
        }
    }
}
