use client::api::auth;
use dioxus::prelude::*;
use shared_types::{AppConfig, PasswordChange, MIN_PASSWORD_LENGTH};
use shared_ui::{
    toast_error, toast_success, use_toast, Button, Card, CardContent, CardHeader, Form,
    PageHeader, TextField,
};
use std::collections::HashMap;

use super::FormFeedback;
use crate::session::{use_api, use_current_session};

/// Profile summary, connection details and password change.
#[component]
pub fn SettingsPage() -> Element {
    let session = use_current_session();
    let config: AppConfig = use_context();
    let api = use_api();
    let toast = use_toast();
    let mut form = use_signal(PasswordChange::default);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_change = move |_: FormEvent| {
        form_error.set(None);
        field_errors.set(HashMap::new());
        let req = match form.read().clone().into_request() {
            Ok(req) => req,
            Err(err) if err.field_errors.is_empty() => {
                toast_error(&toast, &err.friendly_message());
                form_error.set(Some(err.friendly_message()));
                return;
            }
            Err(err) => {
                field_errors.set(FormFeedback::from(err).show(&toast));
                return;
            }
        };
        let api = api();
        spawn(async move {
            saving.set(true);
            match auth::change_password(&api, &req).await {
                Ok(resp) => {
                    tracing::info!("password changed");
                    let message = if resp.message.is_empty() {
                        "Password updated".to_string()
                    } else {
                        resp.message
                    };
                    toast_success(&toast, &message);
                    form.set(PasswordChange::default());
                }
                Err(err) => {
                    tracing::warn!(error = %err, "password change failed");
                    toast_error(&toast, &err.friendly_message());
                    form_error.set(Some(err.friendly_message()));
                }
            }
            saving.set(false);
        });
    };

    let field_error = move |key: &str| field_errors.read().get(key).cloned();
    let contact = if session.email.is_empty() { session.phone.clone() } else { session.email.clone() };

    rsx! {
        PageHeader { title: "Settings", description: "Your account and connection details." }

        div { class: "page-two-col",
            Card {
                CardHeader { title: "Profile" }
                CardContent {
                    dl { class: "settings-profile",
                        dt { "Name" }
                        dd { "{session.display_name}" }
                        dt { "Contact" }
                        dd { "{contact}" }
                        dt { "Role" }
                        dd { "{session.role.label()}" }
                        dt { "API" }
                        dd { class: "cell-mono", "{config.api.base_url}" }
                    }
                }
            }

            Card {
                CardHeader {
                    title: "Change password",
                    description: "At least {MIN_PASSWORD_LENGTH} characters.",
                }
                CardContent {
                    if let Some(err) = form_error() {
                        div { class: "form-error", role: "alert", "{err}" }
                    }
                    Form { onsubmit: handle_change, busy: saving(),
                        TextField {
                            label: "Current password",
                            input_type: "password",
                            value: form.read().current_password.clone(),
                            required: true,
                            error: field_error("current_password"),
                            on_input: move |v: String| form.write().current_password = v,
                        }
                        TextField {
                            label: "New password",
                            input_type: "password",
                            value: form.read().new_password.clone(),
                            required: true,
                            error: field_error("new_password"),
                            on_input: move |v: String| form.write().new_password = v,
                        }
                        TextField {
                            label: "Confirm new password",
                            input_type: "password",
                            value: form.read().confirm_password.clone(),
                            required: true,
                            error: field_error("confirm_password"),
                            on_input: move |v: String| form.write().confirm_password = v,
                        }
                        Button { button_type: "submit", busy: saving(), busy_label: "Updating...", "Update password" }
                    }
                }
            }
        }
    }
}
