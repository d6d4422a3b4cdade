use dioxus::prelude::*;

/// One entry of a [`SelectField`].
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Native select for forms and list filters.
///
/// `placeholder`, when set, is rendered as a leading option with an empty
/// value; filters use it as "all".
#[component]
pub fn SelectField(
    label: String,
    value: String,
    options: Vec<SelectOption>,
    on_change: EventHandler<String>,
    #[props(default)] placeholder: String,
    #[props(default)] error: Option<String>,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "field",
            span { class: "field-label", "{label}" }
            select {
                class: "form-select",
                value: value.clone(),
                disabled: disabled,
                "aria-invalid": if error.is_some() { "true" } else { "false" },
                onchange: move |evt| on_change.call(evt.value()),
                if !placeholder.is_empty() {
                    option { value: "", selected: value.is_empty(), "{placeholder}" }
                }
                for opt in options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == value,
                        "{opt.label}"
                    }
                }
            }
            if let Some(message) = error {
                span { class: "field-error", role: "alert", "{message}" }
            }
        }
    }
}
