use client::api::{assessments, policies};
use dioxus::prelude::*;
use shared_types::{
    short_id, AppError, Assessment, AssessmentStatus, PolicyDraft, PolicyStatus, POLICY_STATUSES,
};
use shared_ui::{
    toast_error, toast_success, use_toast, Button, ButtonVariant, Card, CardContent, CardHeader,
    DataTable, DataTableCell, DataTableRow, ErrorBanner, Form, FormRow, PageHeader, SelectField,
    SkeletonRows, StatusBadge, TextField,
};
use std::collections::HashMap;

use super::issue_policy::IssuePolicyPanel;
use super::{can_manage_policies, farmer_scope, status_options, FormFeedback};
use crate::format_helpers::{format_currency, format_date};
use crate::loader::use_loader;
use crate::session::{use_api, use_current_session};

/// Policy list. Farmers see their own; admins and insurers also create
/// policies, change status and issue from completed assessments.
#[component]
pub fn PoliciesPage() -> Element {
    let session = use_current_session();
    let api = use_api();
    let toast = use_toast();
    let manage = can_manage_policies(session.role);
    let scope = farmer_scope(&session);
    let own_only = scope.is_some();
    let mut status_filter = use_signal(String::new);
    let mut issuing = use_signal(|| Option::<Assessment>::None);
    let mut show_form = use_signal(|| false);

    let list = use_loader(move || {
        let api = api();
        let status = PolicyStatus::parse_filter(&status_filter());
        let scope = scope.clone();
        async move { policies::list_policies(&api, status, scope.as_deref()).await }
    });

    // Completed assessments still waiting for a policy.
    let ready = use_loader(move || {
        let api = api();
        async move {
            if !manage {
                return Ok(Vec::new());
            }
            let done = assessments::list_assessments(&api, Some(AssessmentStatus::Completed)).await?;
            let waiting: Vec<Assessment> =
                done.into_iter().filter(Assessment::can_issue_policy).collect();
            Ok::<_, AppError>(waiting)
        }
    });

    let change_status = move |id: String, status: PolicyStatus| {
        let api = api();
        spawn(async move {
            match policies::update_policy_status(&api, &id, status).await {
                Ok(()) => {
                    toast_success(&toast, &format!("Policy marked {}", status.as_str()));
                    list.reload();
                }
                Err(err) => {
                    tracing::error!(error = %err, policy_id = %id, "status change failed");
                    toast_error(&toast, &err.friendly_message());
                }
            }
        });
    };

    let items = list.items();
    let waiting = ready.items();
    let today = chrono::Utc::now().date_naive();
    let title = if own_only { "My policies" } else { "Policies" };

    rsx! {
        PageHeader {
            title: "{title}",
            description: "Coverage, premiums and policy periods.",
            if manage {
                Button {
                    variant: if show_form() { ButtonVariant::Outline } else { ButtonVariant::Primary },
                    onclick: move |_| show_form.toggle(),
                    if show_form() { "Close" } else { "New policy" }
                }
            }
        }

        if manage && show_form() {
            NewPolicyForm {
                on_created: move |_| {
                    show_form.set(false);
                    list.reload();
                },
            }
        }

        if let Some(assessment) = issuing() {
            IssuePolicyPanel {
                key: "{assessment.id}",
                assessment,
                on_issued: move |_| {
                    issuing.set(None);
                    list.reload();
                    ready.reload();
                },
                on_close: move |_| issuing.set(None),
            }
        }

        if manage && !waiting.is_empty() {
            Card {
                CardHeader {
                    title: "Ready to issue",
                    description: "Completed assessments without a policy.",
                }
                CardContent {
                    DataTable {
                        columns: vec!["Assessment".into(), "Farm".into(), "Risk".into(), "".into()],
                        for assessment in waiting {
                            DataTableRow { key: "{assessment.id}",
                                DataTableCell { class: "cell-mono", "{short_id(&assessment.id)}" }
                                DataTableCell { class: "cell-mono", "{short_id(&assessment.farm_id)}" }
                                DataTableCell { "{assessment.risk_band()}" }
                                DataTableCell {
                                    div { class: "row-actions",
                                        Button {
                                            onclick: {
                                                let assessment = assessment.clone();
                                                move |_: MouseEvent| issuing.set(Some(assessment.clone()))
                                            },
                                            "Issue policy"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        Card {
            CardHeader { title: "Policies",
                SelectField {
                    label: "Status",
                    value: status_filter(),
                    options: status_options(POLICY_STATUSES.iter().map(|s| s.as_str())),
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
                            "Policy".into(), "Crop".into(), "Coverage".into(), "Premium".into(),
                            "Period".into(), "Status".into(), "".into(),
                        ],
                        empty: items.is_empty(),
                        empty_message: "No policies found.",
                        for policy in items {
                            DataTableRow { key: "{policy.id}",
                                DataTableCell { class: "cell-mono", "{policy.reference()}" }
                                DataTableCell { "{policy.crop_type}" }
                                DataTableCell { "{format_currency(policy.coverage_amount)}" }
                                DataTableCell { "{format_currency(policy.premium)}" }
                                DataTableCell {
                                    "{format_date(policy.start_date.as_deref())} to {format_date(policy.end_date.as_deref())}"
                                    if let Some(days) = policy.days_remaining(today).filter(|d| *d >= 0) {
                                        div { class: "cell-muted", "{days} days left" }
                                    }
                                }
                                DataTableCell { StatusBadge { status: policy.status.as_str().to_string() } }
                                DataTableCell {
                                    if manage {
                                        SelectField {
                                            label: "",
                                            value: policy.status.as_str().to_string(),
                                            options: status_options(POLICY_STATUSES.iter().map(|s| s.as_str())),
                                            on_change: {
                                                let id = policy.id.clone();
                                                let current = policy.status;
                                                move |v: String| {
                                                    if let Some(next) = PolicyStatus::parse_filter(&v) {
                                                        if next != current {
                                                            change_status(id.clone(), next);
                                                        }
                                                    }
                                                }
                                            },
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
}

/// Create-policy form for admins and insurers.
#[component]
fn NewPolicyForm(on_created: EventHandler<()>) -> Element {
    let api = use_api();
    let toast = use_toast();
    let mut draft = use_signal(PolicyDraft::default);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut saving = use_signal(|| false);

    let handle_create = move |_: FormEvent| {
        let api = api();
        let draft_value = draft.read().clone();
        spawn(async move {
            saving.set(true);
            field_errors.set(HashMap::new());
            match policies::create_policy(&api, draft_value).await {
                Ok(policy) => {
                    toast_success(&toast, &format!("Policy {} created", policy.reference()));
                    draft.set(PolicyDraft::default());
                    on_created.call(());
                }
                Err(err) if err.is_validation() => field_errors.set(FormFeedback::from(err).show(&toast)),
                Err(err) => {
                    tracing::error!(error = %err, "create policy failed");
                    toast_error(&toast, &err.friendly_message());
                }
            }
            saving.set(false);
        });
    };

    let field_error = move |key: &str| field_errors.read().get(key).cloned();

    rsx! {
        Card {
            CardHeader { title: "New policy" }
            CardContent {
                Form { onsubmit: handle_create, busy: saving(),
                    FormRow {
                        TextField {
                            label: "Farmer ID",
                            value: draft.read().farmer_id.clone(),
                            required: true,
                            error: field_error("farmer_id"),
                            on_input: move |v: String| draft.write().farmer_id = v,
                        }
                        TextField {
                            label: "Farm ID",
                            value: draft.read().farm_id.clone(),
                            on_input: move |v: String| draft.write().farm_id = v,
                        }
                        TextField {
                            label: "Crop type",
                            value: draft.read().crop_type.clone(),
                            required: true,
                            error: field_error("crop_type"),
                            on_input: move |v: String| draft.write().crop_type = v,
                        }
                    }
                    FormRow {
                        TextField {
                            label: "Coverage amount",
                            value: draft.read().coverage_amount.clone(),
                            required: true,
                            error: field_error("coverage_amount"),
                            on_input: move |v: String| draft.write().coverage_amount = v,
                        }
                        TextField {
                            label: "Premium",
                            value: draft.read().premium.clone(),
                            required: true,
                            error: field_error("premium"),
                            on_input: move |v: String| draft.write().premium = v,
                        }
                    }
                    FormRow {
                        TextField {
                            label: "Start date",
                            input_type: "date",
                            value: draft.read().start_date.clone(),
                            required: true,
                            error: field_error("start_date"),
                            on_input: move |v: String| draft.write().start_date = v,
                        }
                        TextField {
                            label: "End date",
                            input_type: "date",
                            value: draft.read().end_date.clone(),
                            required: true,
                            error: field_error("end_date"),
                            on_input: move |v: String| draft.write().end_date = v,
                        }
                    }
                    Button { button_type: "submit", busy: saving(), busy_label: "Saving...", "Create policy" }
                }
            }
        }
    }
}
