use client::api::{claims, policies};
use dioxus::prelude::*;
use shared_types::{
    short_id, AppError, Claim, ClaimDraft, ClaimStatus, Policy, CLAIM_STATUSES, LOSS_EVENT_TYPES,
};
use shared_ui::{
    toast_error, toast_success, use_toast, Button, ButtonVariant, Card, CardContent, CardHeader,
    ConfirmDialog, DataTable, DataTableCell, DataTableRow, ErrorBanner, Form, FormRow, PageHeader,
    SelectField, SelectOption, SkeletonRows, StatusBadge, TextAreaField, TextField,
};
use std::collections::HashMap;

use super::{can_review_claims, farmer_scope, status_options, FormFeedback};
use crate::format_helpers::{format_currency, format_date};
use crate::loader::use_loader;
use crate::session::{use_api, use_current_session};

/// Claims list. Farmers file claims against their active policies; admins
/// and insurers move undecided claims forward.
#[component]
pub fn ClaimsPage() -> Element {
    let session = use_current_session();
    let api = use_api();
    let toast = use_toast();
    let review = can_review_claims(session.role);
    let scope = farmer_scope(&session);
    let own_only = scope.is_some();
    let mut status_filter = use_signal(String::new);
    let mut show_form = use_signal(|| false);
    let mut pending_reject = use_signal(|| Option::<Claim>::None);

    let list = use_loader(move || {
        let api = api();
        let status = ClaimStatus::parse_filter(&status_filter());
        let scope = scope.clone();
        async move { claims::list_claims(&api, status, scope.as_deref()).await }
    });

    let set_status = move |id: String, status: ClaimStatus| {
        let api = api();
        spawn(async move {
            match claims::update_claim_status(&api, &id, status, None).await {
                Ok(()) => {
                    tracing::info!(claim_id = %id, status = status.as_str(), "claim updated");
                    toast_success(&toast, &format!("Claim marked {}", status.as_str()));
                    list.reload();
                }
                Err(err) => {
                    tracing::error!(error = %err, claim_id = %id, "claim update failed");
                    toast_error(&toast, &err.friendly_message());
                }
            }
        });
    };

    let items = list.items();
    let title = if own_only { "My claims" } else { "Claims" };

    rsx! {
        PageHeader { title: "{title}", description: "Loss claims and their review status.",
            if own_only {
                Button {
                    variant: if show_form() { ButtonVariant::Outline } else { ButtonVariant::Primary },
                    onclick: move |_| show_form.toggle(),
                    if show_form() { "Close" } else { "File a claim" }
                }
            }
        }

        if own_only && show_form() {
            FileClaimForm {
                on_filed: move |_| {
                    show_form.set(false);
                    list.reload();
                },
            }
        }

        Card {
            CardHeader { title: "Claims",
                SelectField {
                    label: "Status",
                    value: status_filter(),
                    options: status_options(CLAIM_STATUSES.iter().map(|s| s.as_str())),
                    placeholder: "All statuses",
                    on_change: move |v: String| status_filter.set(v),
                }
            }
            CardContent {
                if let Some(err) = list.error() {
                    ErrorBanner { message: err, on_retry: move |_| list.reload() }
                }
                if list.loading() && items.is_empty() {
                    SkeletonRows {}
                } else {
                    DataTable {
                        columns: vec![
                            "Claim".into(), "Policy".into(), "Loss".into(), "Description".into(),
                            "Amount".into(), "Filed".into(), "Status".into(), "".into(),
                        ],
                        empty: items.is_empty(),
                        empty_message: "No claims found.",
                        for claim in items {
                            DataTableRow { key: "{claim.id}",
                                DataTableCell { class: "cell-mono", "{short_id(&claim.id)}" }
                                DataTableCell { class: "cell-mono", "{short_id(&claim.policy_id)}" }
                                DataTableCell { "{claim.loss_label()}" }
                                DataTableCell { class: "cell-muted", "{claim.loss_description}" }
                                DataTableCell { "{amount_label(claim.amount_claimed)}" }
                                DataTableCell { "{format_date(claim.created_at.as_deref())}" }
                                DataTableCell { StatusBadge { status: claim.status.as_str().to_string() } }
                                DataTableCell {
                                    if review && !claim.status.is_final() {
                                        div { class: "row-actions",
                                            if claim.status != ClaimStatus::Processing {
                                                Button {
                                                    variant: ButtonVariant::Outline,
                                                    onclick: {
                                                        let id = claim.id.clone();
                                                        move |_: MouseEvent| set_status(id.clone(), ClaimStatus::Processing)
                                                    },
                                                    "Process"
                                                }
                                            }
                                            Button {
                                                onclick: {
                                                    let id = claim.id.clone();
                                                    move |_: MouseEvent| set_status(id.clone(), ClaimStatus::Approved)
                                                },
                                                "Approve"
                                            }
                                            Button {
                                                variant: ButtonVariant::Destructive,
                                                onclick: {
                                                    let claim = claim.clone();
                                                    move |_: MouseEvent| pending_reject.set(Some(claim.clone()))
                                                },
                                                "Reject"
                                            }
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
            open: pending_reject.read().is_some(),
            title: "Reject claim?",
            description: "The farmer is notified that this claim was rejected.",
            confirm_label: "Reject",
            on_confirm: move |_| {
                if let Some(claim) = pending_reject.write().take() {
                    set_status(claim.id, ClaimStatus::Rejected);
                }
            },
            on_cancel: move |_| pending_reject.set(None),
        }
    }
}

fn amount_label(amount: Option<f64>) -> String {
    amount.map(format_currency).unwrap_or_else(|| "-".to_string())
}

fn policy_options(policies: &[Policy]) -> Vec<SelectOption> {
    policies
        .iter()
        .filter(|p| p.is_claimable())
        .map(|p| SelectOption::new(p.id.clone(), format!("{} ({})", p.reference(), p.crop_type)))
        .collect()
}

/// Claim filing form. Validation runs before any request; a claim without
/// a selected policy never reaches the API.
#[component]
fn FileClaimForm(on_filed: EventHandler<()>) -> Element {
    let session = use_current_session();
    let api = use_api();
    let toast = use_toast();
    let mut draft = use_signal(ClaimDraft::default);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut saving = use_signal(|| false);

    let farmer_id = session.user_id.clone();
    let own_policies = use_loader(move || {
        let api = api();
        let farmer_id = farmer_id.clone();
        async move { policies::list_policies(&api, None, Some(&farmer_id)).await }
    });

    let handle_file = move |_: FormEvent| {
        let api = api();
        let draft_value = draft.read().clone();
        spawn(async move {
            saving.set(true);
            field_errors.set(HashMap::new());
            let result: Result<Claim, AppError> = claims::create_claim(&api, draft_value).await;
            match result {
                Ok(claim) => {
                    tracing::info!(claim_id = %claim.id, "claim filed");
                    toast_success(&toast, "Claim submitted");
                    draft.set(ClaimDraft::default());
                    on_filed.call(());
                }
                Err(err) if err.is_validation() => {
                    field_errors.set(FormFeedback::from(err).show(&toast));
                }
                Err(err) => {
                    tracing::error!(error = %err, "filing claim failed");
                    toast_error(&toast, &err.friendly_message());
                }
            }
            saving.set(false);
        });
    };

    let field_error = move |key: &str| field_errors.read().get(key).cloned();
    let loss_options: Vec<SelectOption> = LOSS_EVENT_TYPES
        .iter()
        .map(|t| SelectOption::new(t.as_str(), t.label()))
        .collect();
    let policy_choices = policy_options(&own_policies.items());
    let policy_placeholder = if own_policies.loading() {
        "Loading policies..."
    } else {
        "Select a policy"
    };

    rsx! {
        Card {
            CardHeader {
                title: "File a claim",
                description: "Claims can be filed against active policies.",
            }
            CardContent {
                Form { onsubmit: handle_file, busy: saving(),
                    FormRow {
                        SelectField {
                            label: "Policy",
                            value: draft.read().policy_id.clone(),
                            options: policy_choices,
                            placeholder: "{policy_placeholder}",
                            error: field_error("policy_id"),
                            on_change: move |v: String| draft.write().policy_id = v,
                        }
                        SelectField {
                            label: "Type of loss",
                            value: draft.read().loss_event_type.clone(),
                            options: loss_options,
                            placeholder: "Select the type of loss",
                            error: field_error("loss_event_type"),
                            on_change: move |v: String| draft.write().loss_event_type = v,
                        }
                    }
                    TextAreaField {
                        label: "What happened?",
                        value: draft.read().loss_description.clone(),
                        error: field_error("loss_description"),
                        on_input: move |v: String| draft.write().loss_description = v,
                    }
                    TextAreaField {
                        label: "Damage photo URLs",
                        rows: 2,
                        hint: "One per line, or separated by commas.",
                        value: draft.read().damage_photos.clone(),
                        on_input: move |v: String| draft.write().damage_photos = v,
                    }
                    TextField {
                        label: "Amount claimed (optional)",
                        value: draft.read().amount_claimed.clone(),
                        error: field_error("amount_claimed"),
                        on_input: move |v: String| draft.write().amount_claimed = v,
                    }
                    Button { button_type: "submit", busy: saving(), busy_label: "Submitting...", "Submit claim" }
                }
            }
        }
    }
}
