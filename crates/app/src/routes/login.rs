use crate::routes::Route;
use crate::session::{use_api, use_session};
use dioxus::prelude::*;
use shared_types::{FeatureFlags, LoginRequest};
use shared_ui::{Button, Card, CardContent, CardHeader, Form, TextField};
use std::collections::HashMap;

/// Sign-in with email or phone number and password.
#[component]
pub fn Login() -> Element {
    let mut state = use_session();
    let api = use_api();
    let flags: FeatureFlags = use_context();
    let mut identifier = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    // Already signed in (e.g. session restored from storage)
    if (state.restored)() && state.session.read().is_some() {
        navigator().replace(Route::Dashboard {});
    }

    let handle_login = move |_: FormEvent| {
        let api = api();
        let req = LoginRequest {
            identifier: identifier(),
            password: password(),
        };
        spawn(async move {
            loading.set(true);
            error_msg.set(None);
            field_errors.set(HashMap::new());

            match client::api::auth::login(&api, &req).await {
                Ok(session) => {
                    tracing::info!(role = session.role.as_str(), "signed in");
                    state.sign_in(session);
                    navigator().replace(Route::Dashboard {});
                }
                Err(err) => {
                    tracing::warn!(error = %err, "sign-in failed");
                    if err.field_errors.is_empty() {
                        error_msg.set(Some(err.friendly_message()));
                    } else {
                        field_errors.set(err.field_errors);
                    }
                }
            }
            loading.set(false);
        });
    };

    let field_error = move |key: &str| field_errors.read().get(key).cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    title: "Sign in",
                    description: "Use the email or phone number you registered with",
                }
                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", role: "alert", "{err}" }
                    }

                    Form { onsubmit: handle_login, busy: loading(),
                        TextField {
                            label: "Email or phone",
                            value: identifier(),
                            placeholder: "you@example.com",
                            required: true,
                            error: field_error("identifier"),
                            on_input: move |v: String| identifier.set(v),
                        }
                        TextField {
                            label: "Password",
                            input_type: "password",
                            value: password(),
                            required: true,
                            error: field_error("password"),
                            on_input: move |v: String| password.set(v),
                        }
                        Button {
                            button_type: "submit",
                            class: "auth-submit",
                            busy: loading(),
                            busy_label: "Signing in...",
                            "Sign in"
                        }
                    }

                    if flags.registration {
                        p { class: "auth-footer",
                            "New farmer? "
                            Link { to: Route::Register {}, class: "auth-link", "Create an account" }
                        }
                    }
                }
            }
        }
    }
}
