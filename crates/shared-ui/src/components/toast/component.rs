use dioxus::prelude::*;
use dioxus_primitives::toast as prim;

pub use dioxus_primitives::toast::{use_toast, ToastOptions, Toasts};

/// Hosts the toast stack. Mount once, above every page that raises toasts.
#[component]
pub fn ToastProvider(props: prim::ToastProviderProps) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::ToastProvider { ..props }
    }
}

/// Raise the destructive toast used for every failed load or mutation.
pub fn toast_error(toasts: &Toasts, message: &str) {
    toasts.error(message.to_string(), ToastOptions::new());
}

pub fn toast_success(toasts: &Toasts, message: &str) {
    toasts.success(message.to_string(), ToastOptions::new());
}
