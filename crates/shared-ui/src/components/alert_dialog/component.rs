use dioxus::prelude::*;
use dioxus_primitives::alert_dialog as prim;

/// Modal confirmation for destructive or session-ending actions.
///
/// `on_confirm` fires only from the confirm button. Cancelling, pressing
/// Escape or clicking outside calls `on_cancel` and nothing else.
#[component]
pub fn ConfirmDialog(
    open: bool,
    title: String,
    description: String,
    #[props(default = "Confirm".to_string())] confirm_label: String,
    #[props(default = "Cancel".to_string())] cancel_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::AlertDialogRoot {
            class: "alert-dialog-overlay",
            open: open,
            on_open_change: move |next: bool| {
                if !next {
                    on_cancel.call(());
                }
            },
            prim::AlertDialogContent { class: "alert-dialog-content",
                prim::AlertDialogTitle { class: "alert-dialog-title", "{title}" }
                prim::AlertDialogDescription { class: "alert-dialog-description", "{description}" }
                prim::AlertDialogActions { class: "alert-dialog-actions",
                    prim::AlertDialogCancel {
                        class: "alert-dialog-cancel",
                        "{cancel_label}"
                    }
                    prim::AlertDialogAction {
                        class: "alert-dialog-action",
                        on_click: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
