use dioxus::prelude::*;

/// Form wrapper that suppresses the browser's default submission and
/// locks its inputs while `busy`.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(default = false)] busy: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            onsubmit: move |evt| {
                evt.prevent_default();
                if !busy {
                    onsubmit.call(evt);
                }
            },
            ..merged,
            fieldset { class: "form-fieldset", disabled: busy,
                {children}
            }
        }
    }
}

/// Grid row laying out two or more fields side by side.
#[component]
pub fn FormRow(children: Element) -> Element {
    rsx! {
        div { class: "form-row", {children} }
    }
}
