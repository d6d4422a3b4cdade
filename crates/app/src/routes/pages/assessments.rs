use client::api::assessments;
use dioxus::prelude::*;
use shared_types::{short_id, Assessment, AssessmentStatus, ASSESSMENT_STATUSES};
use shared_ui::{
    Button, Card, CardContent, CardHeader, DataTable, DataTableCell, DataTableRow, ErrorBanner,
    PageHeader, SelectField, SkeletonRows, StatusBadge,
};

use super::issue_policy::IssuePolicyPanel;
use super::{can_manage_policies, status_options};
use crate::loader::use_loader;
use crate::session::{use_api, use_current_session};

fn risk_label(assessment: &Assessment) -> String {
    match assessment.risk_score {
        Some(score) => format!("{score:.0} ({})", assessment.risk_band()),
        None => assessment.risk_band().to_string(),
    }
}

/// Field assessments with their risk scores. Policy managers can issue a
/// policy straight from a completed assessment.
#[component]
pub fn AssessmentsPage() -> Element {
    let session = use_current_session();
    let api = use_api();
    let manage = can_manage_policies(session.role);
    let mut status_filter = use_signal(String::new);
    let mut issuing = use_signal(|| Option::<Assessment>::None);

    let list = use_loader(move || {
        let api = api();
        let status = AssessmentStatus::parse_filter(&status_filter());
        async move { assessments::list_assessments(&api, status).await }
    });

    let items = list.items();

    rsx! {
        PageHeader { title: "Assessments", description: "Farm risk assessments and their progress." }

        if let Some(assessment) = issuing() {
            IssuePolicyPanel {
                key: "{assessment.id}",
                assessment,
                on_issued: move |_| {
                    issuing.set(None);
                    list.reload();
                },
                on_close: move |_| issuing.set(None),
            }
        }

        Card {
            CardHeader { title: "Assessments",
                SelectField {
                    label: "Status",
                    value: status_filter(),
                    options: status_options(ASSESSMENT_STATUSES.iter().map(|s| s.as_str())),
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
                            "Assessment".into(), "Farm".into(), "Risk".into(), "Notes".into(),
                            "Status".into(), "".into(),
                        ],
                        empty: items.is_empty(),
                        empty_message: "No assessments found.",
                        for assessment in items {
                            DataTableRow { key: "{assessment.id}",
                                DataTableCell { class: "cell-mono", "{short_id(&assessment.id)}" }
                                DataTableCell { class: "cell-mono", "{short_id(&assessment.farm_id)}" }
                                DataTableCell { "{risk_label(&assessment)}" }
                                DataTableCell { class: "cell-muted", "{assessment.notes.as_deref().unwrap_or_default()}" }
                                DataTableCell { StatusBadge { status: assessment.status.as_str().to_string() } }
                                DataTableCell {
                                    if manage && assessment.can_issue_policy() {
                                        Button {
                                            onclick: {
                                                let assessment = assessment.clone();
                                                move |_: MouseEvent| issuing.set(Some(assessment.clone()))
                                            },
                                            "Issue policy"
                                        }
                                    }
                                    if let Some(policy_id) = assessment.policy_id.as_deref() {
                                        span { class: "cell-muted", "Policy {short_id(policy_id)}" }
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
