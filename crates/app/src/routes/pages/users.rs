use client::api::users;
use dioxus::prelude::*;
use shared_types::{UserDraft, UserRole, UserRow, ALL_ROLES};
use shared_ui::{
    toast_error, toast_success, use_toast, Button, ButtonVariant, Card, CardContent, CardHeader,
    ConfirmDialog, DataTable, DataTableCell, DataTableRow, ErrorBanner, Form, FormRow, PageHeader,
    SelectField, SelectOption, SkeletonRows, StatusBadge, TextField,
};
use std::collections::HashMap;

use super::FormFeedback;
use crate::loader::use_loader;
use crate::session::use_api;

fn role_options() -> Vec<SelectOption> {
    ALL_ROLES
        .iter()
        .map(|r| SelectOption::new(r.as_str(), r.label()))
        .collect()
}

/// Admin user management: list, filter by role, create, (de)activate, delete.
#[component]
pub fn UsersPage() -> Element {
    let api = use_api();
    let toast = use_toast();
    let mut role_filter = use_signal(String::new);
    let mut show_form = use_signal(|| false);
    let mut draft = use_signal(UserDraft::default);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut saving = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<UserRow>::None);

    let rows = use_loader(move || {
        let api = api();
        let filter = role_filter();
        async move {
            let role = (!filter.is_empty()).then(|| UserRole::from_str_or_default(&filter));
            users::list_user_rows(&api, role).await
        }
    });

    let handle_create = move |_: FormEvent| {
        let api = api();
        let req = match draft.read().clone().into_request() {
            Ok(req) => req,
            Err(err) => {
                field_errors.set(FormFeedback::from(err).show(&toast));
                return;
            }
        };
        field_errors.set(HashMap::new());
        spawn(async move {
            saving.set(true);
            match users::create_user(&api, &req).await {
                Ok(user) => {
                    tracing::info!(user_id = %user.id, "user created");
                    toast_success(&toast, "User created");
                    draft.set(UserDraft::default());
                    show_form.set(false);
                    rows.reload();
                }
                Err(err) => {
                    tracing::error!(error = %err, "create user failed");
                    field_errors.set(err.field_errors.clone());
                    toast_error(&toast, &err.friendly_message());
                }
            }
            saving.set(false);
        });
    };

    let toggle_active = move |row: UserRow| {
        let api = api();
        let activate = row.status != "active";
        spawn(async move {
            match users::set_user_active(&api, &row.id, activate).await {
                Ok(()) => {
                    let verb = if activate { "activated" } else { "deactivated" };
                    toast_success(&toast, &format!("{} {verb}", row.name));
                    rows.reload();
                }
                Err(err) => toast_error(&toast, &err.friendly_message()),
            }
        });
    };

    let confirm_delete = move |_: ()| {
        let Some(row) = pending_delete.write().take() else {
            return;
        };
        let api = api();
        spawn(async move {
            match users::delete_user(&api, &row.id).await {
                Ok(()) => {
                    toast_success(&toast, &format!("{} deleted", row.name));
                    rows.reload();
                }
                Err(err) => toast_error(&toast, &err.friendly_message()),
            }
        });
    };

    let field_error = move |key: &str| field_errors.read().get(key).cloned();
    let items = rows.items();
    let delete_name = pending_delete
        .read()
        .as_ref()
        .map(|r| r.name.clone())
        .unwrap_or_default();

    rsx! {
        PageHeader { title: "Users", description: "Everyone with access to the platform.",
            Button {
                variant: if show_form() { ButtonVariant::Outline } else { ButtonVariant::Primary },
                onclick: move |_| show_form.toggle(),
                if show_form() { "Close" } else { "Add user" }
            }
        }

        if show_form() {
            Card {
                CardHeader { title: "New user", description: "The user signs in with this email and password." }
                CardContent {
                    Form { onsubmit: handle_create, busy: saving(),
                        FormRow {
                            TextField {
                                label: "First name",
                                value: draft.read().first_name.clone(),
                                required: true,
                                error: field_error("first_name"),
                                on_input: move |v: String| draft.write().first_name = v,
                            }
                            TextField {
                                label: "Last name",
                                value: draft.read().last_name.clone(),
                                required: true,
                                error: field_error("last_name"),
                                on_input: move |v: String| draft.write().last_name = v,
                            }
                        }
                        FormRow {
                            TextField {
                                label: "Email",
                                input_type: "email",
                                value: draft.read().email.clone(),
                                required: true,
                                error: field_error("email"),
                                on_input: move |v: String| draft.write().email = v,
                            }
                            TextField {
                                label: "Phone",
                                input_type: "tel",
                                value: draft.read().phone.clone(),
                                required: true,
                                error: field_error("phone"),
                                on_input: move |v: String| draft.write().phone = v,
                            }
                        }
                        FormRow {
                            SelectField {
                                label: "Role",
                                value: draft.read().role.as_str().to_string(),
                                options: role_options(),
                                on_change: move |v: String| draft.write().role = UserRole::from_str_or_default(&v),
                            }
                            TextField {
                                label: "Temporary password",
                                input_type: "password",
                                value: draft.read().password.clone(),
                                required: true,
                                error: field_error("password"),
                                on_input: move |v: String| draft.write().password = v,
                            }
                        }
                        Button { button_type: "submit", busy: saving(), busy_label: "Creating...", "Create user" }
                    }
                }
            }
        }

        Card {
            CardHeader { title: "All users",
                SelectField {
                    label: "Role",
                    value: role_filter(),
                    options: role_options(),
                    placeholder: "All roles",
                    on_change: move |v: String| role_filter.set(v),
                }
            }
            CardContent {
                if let Some(err) = rows.error() {
                    ErrorBanner { message: err, on_retry: move |_| rows.reload() }
                }
                if rows.loading() && items.is_empty() {
                    SkeletonRows {}
                } else {
                    DataTable {
                        columns: vec!["Name".into(), "Email".into(), "Phone".into(), "Role".into(), "Status".into(), "Details".into(), "".into()],
                        empty: items.is_empty(),
                        empty_message: "No users match this filter.",
                        for row in items {
                            DataTableRow { key: "{row.id}",
                                DataTableCell { "{row.name}" }
                                DataTableCell { "{row.email}" }
                                DataTableCell { "{row.phone}" }
                                DataTableCell { "{row.role.label()}" }
                                DataTableCell { StatusBadge { status: row.status.to_string() } }
                                DataTableCell { class: "cell-muted", "{row.detail}" }
                                DataTableCell {
                                    div { class: "row-actions",
                                        Button {
                                            variant: ButtonVariant::Outline,
                                            onclick: {
                                                let row = row.clone();
                                                move |_: MouseEvent| toggle_active(row.clone())
                                            },
                                            if row.status == "active" { "Deactivate" } else { "Activate" }
                                        }
                                        Button {
                                            variant: ButtonVariant::Destructive,
                                            onclick: {
                                                let row = row.clone();
                                                move |_: MouseEvent| pending_delete.set(Some(row.clone()))
                                            },
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        ConfirmDialog {
            open: pending_delete.read().is_some(),
            title: "Delete user?",
            description: "{delete_name} will lose access immediately. This cannot be undone.",
            confirm_label: "Delete",
            on_confirm: confirm_delete,
            on_cancel: move |_| pending_delete.set(None),
        }
    }
}
