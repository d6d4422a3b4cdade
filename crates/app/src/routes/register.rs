use crate::routes::Route;
use crate::session::use_api;
use dioxus::prelude::*;
use shared_types::{FarmerRegistration, FeatureFlags, RegistrationField, REGISTRATION_STEPS};
use shared_ui::{toast_success, use_toast, Button, ButtonVariant, Card, CardContent, CardHeader, TextField};
use std::collections::HashMap;

fn input_type(field: RegistrationField) -> &'static str {
    match field {
        RegistrationField::Email => "email",
        RegistrationField::Phone => "tel",
        RegistrationField::FarmSize => "number",
        RegistrationField::Password | RegistrationField::ConfirmPassword => "password",
        _ => "text",
    }
}

/// Four-step farmer self-registration.
#[component]
pub fn Register() -> Element {
    let flags: FeatureFlags = use_context();
    let api = use_api();
    let toast = use_toast();
    let mut wizard = use_signal(FarmerRegistration::default);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    if !flags.registration {
        navigator().replace(Route::Login {});
        return rsx! {};
    }

    let step = wizard.read().step;
    let step_number = step.index() + 1;
    let step_count = REGISTRATION_STEPS.len();

    let handle_next = move |_: MouseEvent| {
        let missing = wizard.read().missing_fields(step);
        if wizard.write().next_step() {
            field_errors.set(HashMap::new());
        } else {
            field_errors.set(
                missing
                    .into_iter()
                    .map(|f| (f.key().to_string(), format!("{} is required", f.label())))
                    .collect(),
            );
        }
    };

    let handle_back = move |_: MouseEvent| {
        wizard.write().prev_step();
        field_errors.set(HashMap::new());
    };

    let handle_submit = move |_: MouseEvent| {
        let api = api();
        let registration = wizard.read().clone();
        spawn(async move {
            error_msg.set(None);
            field_errors.set(HashMap::new());
            let req = match registration.into_request() {
                Ok(req) => req,
                Err(err) => {
                    if err.field_errors.is_empty() {
                        error_msg.set(Some(err.friendly_message()));
                    } else {
                        let mut errors = err.field_errors;
                        // Password rules report against the settings form's key.
                        if let Some(msg) = errors.remove("new_password") {
                            errors.insert(RegistrationField::Password.key().to_string(), msg);
                        }
                        field_errors.set(errors);
                    }
                    return;
                }
            };

            submitting.set(true);
            match client::api::auth::register_farmer(&api, &req).await {
                Ok(_) => {
                    tracing::info!("farmer registered");
                    toast_success(&toast, "Registration complete. You can now sign in.");
                    navigator().replace(Route::Login {});
                }
                Err(err) => {
                    tracing::warn!(error = %err, "registration failed");
                    error_msg.set(Some(err.friendly_message()));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card wizard",
                CardHeader {
                    title: "Register your farm",
                    description: "Step {step_number} of {step_count}: {step.title()}",
                }
                CardContent {
                    ol { class: "wizard-steps",
                        for s in REGISTRATION_STEPS.iter().copied() {
                            li {
                                key: "{s.index()}",
                                class: "wizard-step",
                                "data-state": if s == step { "current" } else if s < step { "done" } else { "todo" },
                                "{s.title()}"
                            }
                        }
                    }

                    if let Some(err) = error_msg() {
                        div { class: "auth-error", role: "alert", "{err}" }
                    }

                    for field in step.required_fields().iter().copied() {
                        TextField {
                            key: "{field.key()}",
                            label: field.label().to_string(),
                            input_type: input_type(field).to_string(),
                            value: wizard.read().form.get(field).to_string(),
                            required: true,
                            error: field_errors.read().get(field.key()).cloned(),
                            on_input: move |v: String| wizard.write().form.set(field, v),
                        }
                    }

                    div { class: "wizard-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            disabled: step.prev().is_none(),
                            onclick: handle_back,
                            "Back"
                        }
                        if step.is_last() {
                            Button {
                                busy: submitting(),
                                busy_label: "Registering...",
                                onclick: handle_submit,
                                "Create account"
                            }
                        } else {
                            Button { onclick: handle_next, "Next" }
                        }
                    }

                    p { class: "auth-footer",
                        "Already registered? "
                        Link { to: Route::Login {}, class: "auth-link", "Sign in" }
                    }
                }
            }
        }
    }
}
