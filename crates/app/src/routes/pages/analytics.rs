use client::api::{claims, policies};
use dioxus::prelude::*;
use shared_types::{AnalyticsSummary, Breakdown};
use shared_ui::{
    Card, CardContent, CardHeader, ErrorBanner, PageHeader, ProportionBar, SkeletonRows, StatCard,
};

use crate::format_helpers::{format_currency, format_percent, format_snake_case_title};
use crate::loader::use_loader;
use crate::session::use_api;

/// Portfolio analytics computed on the client from the policy and claim
/// lists.
#[component]
pub fn AnalyticsPage() -> Element {
    let api = use_api();

    let policy_list = use_loader(move || {
        let api = api();
        async move { policies::list_policies(&api, None, None).await }
    });
    let claim_list = use_loader(move || {
        let api = api();
        async move { claims::list_claims(&api, None, None).await }
    });

    let loading = policy_list.loading() || claim_list.loading();
    let error = policy_list.error().or_else(|| claim_list.error());
    let summary = AnalyticsSummary::compute(&policy_list.items(), &claim_list.items());

    rsx! {
        PageHeader {
            title: "Analytics",
            description: "Policy and claim figures across the portfolio.",
        }

        if let Some(err) = error {
            ErrorBanner {
                message: err,
                on_retry: move |_| {
                    policy_list.reload();
                    claim_list.reload();
                },
            }
        }

        div { class: "page-grid",
            StatCard { label: "Policies", value: "{summary.total_policies}", loading }
            StatCard { label: "Claims", value: "{summary.total_claims}", loading }
            StatCard {
                label: "Approval rate",
                value: format_percent(summary.approval_rate),
                hint: "Approved share of decided claims",
                loading,
            }
            StatCard { label: "Total coverage", value: format_currency(summary.total_coverage), loading }
            StatCard { label: "Premiums", value: format_currency(summary.total_premium), loading }
        }

        div { class: "page-two-col",
            BreakdownCard { title: "Policies by status", rows: summary.policies_by_status, loading, title_case: true }
            BreakdownCard { title: "Claims by status", rows: summary.claims_by_status, loading, title_case: true }
            BreakdownCard { title: "Policies by crop", rows: summary.policies_by_crop, loading, title_case: false }
        }
    }
}

#[component]
fn BreakdownCard(title: String, rows: Vec<Breakdown>, loading: bool, title_case: bool) -> Element {
    rsx! {
        Card {
            CardHeader { title }
            CardContent {
                if loading && rows.is_empty() {
                    SkeletonRows { rows: 3 }
                } else if rows.is_empty() {
                    p { class: "cell-muted", "Nothing recorded yet." }
                } else {
                    for row in rows {
                        ProportionBar {
                            key: "{row.label}",
                            label: if title_case { format_snake_case_title(&row.label) } else { row.label.clone() },
                            count: row.count,
                            percent: row.percent,
                        }
                    }
                }
            }
        }
    }
}
