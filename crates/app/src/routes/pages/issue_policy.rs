use client::api::policies;
use dioxus::prelude::*;
use shared_types::{short_id, Assessment, IssuePolicyDraft};
use shared_ui::{
    toast_error, toast_success, use_toast, Button, ButtonVariant, Card, CardContent, CardHeader,
    Form, FormRow, TextField,
};
use std::collections::HashMap;

use super::FormFeedback;
use crate::session::use_api;

/// Terms form for turning a completed assessment into a policy.
#[component]
pub fn IssuePolicyPanel(
    assessment: Assessment,
    on_issued: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let api = use_api();
    let toast = use_toast();
    let mut draft = use_signal(IssuePolicyDraft::default);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut saving = use_signal(|| false);

    let assessment_id = assessment.id.clone();
    let handle_issue = move |_: FormEvent| {
        let req = match draft.read().clone().into_request() {
            Ok(req) => req,
            Err(err) => {
                field_errors.set(FormFeedback::from(err).show(&toast));
                return;
            }
        };
        field_errors.set(HashMap::new());
        let api = api();
        let id = assessment_id.clone();
        spawn(async move {
            saving.set(true);
            match policies::issue_from_assessment(&api, &id, &req).await {
                Ok(policy) => {
                    tracing::info!(assessment_id = %id, policy_id = %policy.id, "policy issued");
                    toast_success(&toast, &format!("Policy {} issued", policy.reference()));
                    on_issued.call(());
                }
                Err(err) => {
                    tracing::error!(error = %err, "issuing policy failed");
                    toast_error(&toast, &err.friendly_message());
                }
            }
            saving.set(false);
        });
    };

    let field_error = move |key: &str| field_errors.read().get(key).cloned();
    let assessment_ref = short_id(&assessment.id);
    let farm_ref = short_id(&assessment.farm_id);
    let risk = match assessment.risk_score {
        Some(score) => format!("risk score {score:.0} ({})", assessment.risk_band()),
        None => "not yet scored".to_string(),
    };

    rsx! {
        Card {
            CardHeader {
                title: "Issue policy",
                description: "Assessment {assessment_ref}, farm {farm_ref}, {risk}",
                Button { variant: ButtonVariant::Ghost, onclick: move |_| on_close.call(()), "Cancel" }
            }
            CardContent {
                Form { onsubmit: handle_issue, busy: saving(),
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
                    Button { button_type: "submit", busy: saving(), busy_label: "Issuing...", "Issue policy" }
                }
            }
        }
    }
}
