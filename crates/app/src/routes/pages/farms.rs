use client::api::farms;
use dioxus::prelude::*;
use shared_types::{total_area, Farm, FarmDraft, UserRole};
use shared_ui::{
    toast_error, toast_success, use_toast, Button, ButtonVariant, Card, CardContent, CardHeader,
    ConfirmDialog, DataTable, DataTableCell, DataTableRow, ErrorBanner, Form, FormRow, PageHeader,
    SkeletonRows, TextField,
};
use std::collections::HashMap;

use super::{farmer_scope, FormFeedback};
use crate::format_helpers::format_area;
use crate::loader::use_loader;
use crate::session::{use_api, use_current_session};

#[component]
pub fn FarmsPage() -> Element {
    let session = use_current_session();
    let api = use_api();
    let toast = use_toast();
    let scope = farmer_scope(&session);
    let own_only = scope.is_some();
    let can_delete = session.role == UserRole::Admin;
    let mut show_form = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<Farm>::None);

    let list = use_loader(move || {
        let api = api();
        let scope = scope.clone();
        async move { farms::list_farms(&api, scope.as_deref()).await }
    });

    let handle_delete = move |farm: Farm| {
        let api = api();
        spawn(async move {
            match farms::delete_farm(&api, &farm.id).await {
                Ok(()) => {
                    tracing::info!(farm_id = %farm.id, "farm deleted");
                    toast_success(&toast, &format!("{} removed", farm.name));
                    list.reload();
                }
                Err(err) => {
                    tracing::error!(error = %err, farm_id = %farm.id, "delete farm failed");
                    toast_error(&toast, &err.friendly_message());
                }
            }
        });
    };

    let items = list.items();
    let title = if own_only { "My farms" } else { "Farms" };
    let empty_message = if own_only {
        "You have not registered any farms yet."
    } else {
        "No farms found."
    };
    let summary = format!("{} farms, {} in total", items.len(), format_area(total_area(&items)));

    rsx! {
        PageHeader { title: "{title}", description: "{summary}",
            if own_only {
                Button {
                    variant: if show_form() { ButtonVariant::Outline } else { ButtonVariant::Primary },
                    onclick: move |_| show_form.toggle(),
                    if show_form() { "Close" } else { "Register farm" }
                }
            }
        }

        if own_only && show_form() {
            NewFarmForm {
                on_created: move |_| {
                    show_form.set(false);
                    list.reload();
                },
            }
        }

        Card {
            CardContent {
                if let Some(err) = list.error() {
                    ErrorBanner { message: err, on_retry: move |_| list.reload() }
                }
                if list.loading() && items.is_empty() {
                    SkeletonRows {}
                } else {
                    DataTable {
                        columns: vec![
                            "Name".into(), "Crop".into(), "Area".into(), "Location".into(), "".into(),
                        ],
                        empty: items.is_empty(),
                        empty_message: "{empty_message}",
                        for farm in items {
                            DataTableRow { key: "{farm.id}",
                                DataTableCell { "{farm.name}" }
                                DataTableCell { "{farm.crop_type}" }
                                DataTableCell { "{format_area(farm.area)}" }
                                DataTableCell { class: "cell-muted", "{farm.location_label()}" }
                                DataTableCell {
                                    if can_delete {
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            onclick: {
                                                let farm = farm.clone();
                                                move |_: MouseEvent| pending_delete.set(Some(farm.clone()))
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
            title: "Delete farm?",
            description: "The farm record is removed permanently.",
            confirm_label: "Delete",
            on_confirm: move |_| {
                if let Some(farm) = pending_delete.write().take() {
                    handle_delete(farm);
                }
            },
            on_cancel: move |_| pending_delete.set(None),
        }
    }
}

/// Farm registration for the signed-in farmer.
#[component]
fn NewFarmForm(on_created: EventHandler<()>) -> Element {
    let session = use_current_session();
    let api = use_api();
    let toast = use_toast();
    let mut draft = use_signal(FarmDraft::default);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut saving = use_signal(|| false);

    let farmer_id = session.user_id.clone();
    let handle_create = move |_: FormEvent| {
        let api = api();
        let farmer_id = farmer_id.clone();
        let draft_value = draft.read().clone();
        spawn(async move {
            saving.set(true);
            field_errors.set(HashMap::new());
            match farms::create_farm(&api, &farmer_id, draft_value).await {
                Ok(farm) => {
                    tracing::info!(farm_id = %farm.id, "farm registered");
                    toast_success(&toast, &format!("{} registered", farm.name));
                    draft.set(FarmDraft::default());
                    on_created.call(());
                }
                Err(err) if err.is_validation() => field_errors.set(FormFeedback::from(err).show(&toast)),
                Err(err) => {
                    tracing::error!(error = %err, "register farm failed");
                    toast_error(&toast, &err.friendly_message());
                }
            }
            saving.set(false);
        });
    };

    let field_error = move |key: &str| field_errors.read().get(key).cloned();

    rsx! {
        Card {
            CardHeader { title: "Register a farm" }
            CardContent {
                Form { onsubmit: handle_create, busy: saving(),
                    FormRow {
                        TextField {
                            label: "Farm name",
                            value: draft.read().name.clone(),
                            required: true,
                            error: field_error("name"),
                            on_input: move |v: String| draft.write().name = v,
                        }
                        TextField {
                            label: "Crop type",
                            value: draft.read().crop_type.clone(),
                            required: true,
                            error: field_error("crop_type"),
                            on_input: move |v: String| draft.write().crop_type = v,
                        }
                        TextField {
                            label: "Area (ha)",
                            input_type: "number",
                            value: draft.read().area.clone(),
                            required: true,
                            error: field_error("area"),
                            on_input: move |v: String| draft.write().area = v,
                        }
                    }
                    FormRow {
                        TextField {
                            label: "Province",
                            value: draft.read().province.clone(),
                            required: true,
                            error: field_error("province"),
                            on_input: move |v: String| draft.write().province = v,
                        }
                        TextField {
                            label: "District",
                            value: draft.read().district.clone(),
                            required: true,
                            error: field_error("district"),
                            on_input: move |v: String| draft.write().district = v,
                        }
                        TextField {
                            label: "Sector",
                            value: draft.read().sector.clone(),
                            on_input: move |v: String| draft.write().sector = v,
                        }
                    }
                    Button { button_type: "submit", busy: saving(), busy_label: "Saving...", "Register farm" }
                }
            }
        }
    }
}
