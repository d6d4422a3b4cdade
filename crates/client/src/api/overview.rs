//! Role-specific overview cards.
//!
//! Each role's overview issues its fetches concurrently. The first fetch of
//! each role is primary and fails the whole overview; the others are
//! optional and count as empty when they fail.

use std::future::Future;

use shared_types::{
    AppError, Assessment, AssessmentStatus, Claim, ClaimStatus, DashboardStats, Farm, Policy,
    PolicyStatus, Session, UserRole,
};

use super::{admin, assessments, claims, farms, policies};
use crate::ApiClient;

/// One stat card on the overview page.
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewStat {
    pub label: &'static str,
    pub value: String,
}

impl OverviewStat {
    fn count(label: &'static str, n: impl ToString) -> Self {
        Self {
            label,
            value: n.to_string(),
        }
    }
}

async fn optional<T>(what: &str, fut: impl Future<Output = Result<Vec<T>, AppError>>) -> Vec<T> {
    match fut.await {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(resource = what, error = %err, "optional overview fetch failed");
            Vec::new()
        }
    }
}

/// Fetch and compute the overview cards for the signed-in role.
#[tracing::instrument(skip(client, session), fields(role = session.role.as_str()))]
pub async fn load_overview(client: &ApiClient, session: &Session) -> Result<Vec<OverviewStat>, AppError> {
    let me = Some(session.user_id.as_str());
    match session.role {
        UserRole::Admin => Ok(admin_cards(&admin::stats(client).await?)),
        UserRole::Farmer => {
            let (policies, claims, farms) = futures::join!(
                policies::list_policies(client, None, me),
                optional("claims", claims::list_claims(client, None, me)),
                optional("farms", farms::list_farms(client, me)),
            );
            Ok(farmer_cards(&policies?, &claims, &farms))
        }
        UserRole::Government => {
            let (policies, claims, farms) = futures::join!(
                policies::list_policies(client, None, None),
                optional("claims", claims::list_claims(client, None, None)),
                optional("farms", farms::list_farms(client, None)),
            );
            Ok(government_cards(&policies?, &claims, &farms))
        }
        UserRole::Insurer => {
            let (policies, claims, assessments) = futures::join!(
                policies::list_policies(client, None, None),
                optional("claims", claims::list_claims(client, None, None)),
                optional("assessments", assessments::list_assessments(client, None)),
            );
            Ok(insurer_cards(&policies?, &claims, &assessments))
        }
        UserRole::Assessor => {
            let (assessments, farms) = futures::join!(
                assessments::list_assessments(client, None),
                optional("farms", farms::list_farms(client, None)),
            );
            Ok(assessor_cards(&assessments?, &farms))
        }
    }
}

fn count_policies(policies: &[Policy], status: PolicyStatus) -> usize {
    policies.iter().filter(|p| p.status == status).count()
}

fn count_claims(claims: &[Claim], status: ClaimStatus) -> usize {
    claims.iter().filter(|c| c.status == status).count()
}

pub fn admin_cards(stats: &DashboardStats) -> Vec<OverviewStat> {
    vec![
        OverviewStat::count("Total users", stats.total_users),
        OverviewStat::count("Farmers", stats.total_farmers),
        OverviewStat::count("Active policies", stats.active_policies),
        OverviewStat::count("Pending claims", stats.pending_claims),
        OverviewStat::count("Registered farms", stats.total_farms),
    ]
}

pub fn farmer_cards(policies: &[Policy], claims: &[Claim], farms: &[Farm]) -> Vec<OverviewStat> {
    vec![
        OverviewStat::count("My farms", farms.len()),
        OverviewStat::count("Active policies", count_policies(policies, PolicyStatus::Active)),
        OverviewStat::count("Claims filed", claims.len()),
        OverviewStat::count("Pending claims", count_claims(claims, ClaimStatus::Pending)),
    ]
}

pub fn government_cards(policies: &[Policy], claims: &[Claim], farms: &[Farm]) -> Vec<OverviewStat> {
    let insured: f64 = policies.iter().map(|p| p.coverage_amount).sum();
    vec![
        OverviewStat::count("Policies", policies.len()),
        OverviewStat::count("Active policies", count_policies(policies, PolicyStatus::Active)),
        OverviewStat::count("Claims", claims.len()),
        OverviewStat::count("Registered farms", farms.len()),
        OverviewStat {
            label: "Total coverage",
            value: format!("{insured:.0}"),
        },
    ]
}

pub fn insurer_cards(
    policies: &[Policy],
    claims: &[Claim],
    assessments: &[Assessment],
) -> Vec<OverviewStat> {
    vec![
        OverviewStat::count("Active policies", count_policies(policies, PolicyStatus::Active)),
        OverviewStat::count("Pending claims", count_claims(claims, ClaimStatus::Pending)),
        OverviewStat::count("Processing claims", count_claims(claims, ClaimStatus::Processing)),
        OverviewStat::count(
            "Ready to issue",
            assessments.iter().filter(|a| a.can_issue_policy()).count(),
        ),
    ]
}

pub fn assessor_cards(assessments: &[Assessment], farms: &[Farm]) -> Vec<OverviewStat> {
    let by = |status| assessments.iter().filter(|a| a.status == status).count();
    vec![
        OverviewStat::count("Assigned", assessments.len()),
        OverviewStat::count("In progress", by(AssessmentStatus::InProgress)),
        OverviewStat::count("Completed", by(AssessmentStatus::Completed)),
        OverviewStat::count("Farms", farms.len()),
    ]
}
