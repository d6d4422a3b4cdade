use crate::{Claim, ClaimStatus, Policy, PolicyStatus};
use std::collections::BTreeMap;

/// One row of a breakdown table: a label, its count and share of the total.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakdown {
    pub label: String,
    pub count: usize,
    /// 0.0 to 100.0; drives the width of the proportion bar.
    pub percent: f64,
}

/// Figures shown on the analytics page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalyticsSummary {
    pub total_policies: usize,
    pub total_claims: usize,
    pub policies_by_status: Vec<Breakdown>,
    pub claims_by_status: Vec<Breakdown>,
    pub policies_by_crop: Vec<Breakdown>,
    /// Approved share of decided (approved or rejected) claims, or `None`
    /// before any claim has been decided.
    pub approval_rate: Option<f64>,
    pub total_coverage: f64,
    pub total_premium: f64,
}

fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

fn breakdown<K: Ord>(counts: BTreeMap<K, usize>, total: usize, label: impl Fn(&K) -> String) -> Vec<Breakdown> {
    counts
        .iter()
        .map(|(k, count)| Breakdown {
            label: label(k),
            count: *count,
            percent: percent(*count, total),
        })
        .collect()
}

impl AnalyticsSummary {
    pub fn compute(policies: &[Policy], claims: &[Claim]) -> Self {
        let mut policy_counts: BTreeMap<PolicyStatus, usize> = BTreeMap::new();
        let mut crop_counts: BTreeMap<String, usize> = BTreeMap::new();
        for p in policies {
            *policy_counts.entry(p.status).or_default() += 1;
            let crop = match p.crop_type.trim() {
                "" => "Unspecified".to_string(),
                c => c.to_lowercase(),
            };
            *crop_counts.entry(crop).or_default() += 1;
        }

        let mut claim_counts: BTreeMap<ClaimStatus, usize> = BTreeMap::new();
        for c in claims {
            *claim_counts.entry(c.status).or_default() += 1;
        }

        let approved = claim_counts.get(&ClaimStatus::Approved).copied().unwrap_or(0);
        let rejected = claim_counts.get(&ClaimStatus::Rejected).copied().unwrap_or(0);
        let approval_rate = (approved + rejected > 0).then(|| percent(approved, approved + rejected));

        Self {
            total_policies: policies.len(),
            total_claims: claims.len(),
            policies_by_status: breakdown(policy_counts, policies.len(), |s| s.as_str().to_string()),
            claims_by_status: breakdown(claim_counts, claims.len(), |s| s.as_str().to_string()),
            policies_by_crop: breakdown(crop_counts, policies.len(), |c| c.clone()),
            approval_rate,
            total_coverage: policies.iter().map(|p| p.coverage_amount).sum(),
            total_premium: policies.iter().map(|p| p.premium).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_inputs() {
        let s = AnalyticsSummary::compute(&[], &[]);
        assert_eq!(s.total_policies, 0);
        assert_eq!(s.approval_rate, None);
        assert!(s.policies_by_status.is_empty());
    }

    #[test]
    fn counts_and_rates() {
        let policies: Vec<Policy> = serde_json::from_value(json!([
            {"id": "1", "status": "active", "cropType": "Maize", "coverageAmount": 100.0, "premium": 5.0},
            {"id": "2", "status": "active", "cropType": "maize", "coverageAmount": 300.0, "premium": 15.0},
            {"id": "3", "status": "expired", "cropType": "beans", "coverageAmount": 100.0, "premium": 5.0},
            {"id": "4", "status": "pending"}
        ]))
        .unwrap();
        let claims: Vec<Claim> = serde_json::from_value(json!([
            {"id": "a", "status": "approved"},
            {"id": "b", "status": "approved"},
            {"id": "c", "status": "approved"},
            {"id": "d", "status": "rejected"},
            {"id": "e", "status": "pending"}
        ]))
        .unwrap();

        let s = AnalyticsSummary::compute(&policies, &claims);
        assert_eq!(s.total_policies, 4);
        assert_eq!(s.total_claims, 5);
        assert_eq!(s.approval_rate, Some(75.0));
        assert_eq!(s.total_coverage, 500.0);
        assert_eq!(s.total_premium, 25.0);

        let active = s.policies_by_status.iter().find(|b| b.label == "active").unwrap();
        assert_eq!(active.count, 2);
        assert_eq!(active.percent, 50.0);

        let crops: Vec<(&str, usize)> = s
            .policies_by_crop
            .iter()
            .map(|b| (b.label.as_str(), b.count))
            .collect();
        assert_eq!(crops, vec![("Unspecified", 1), ("beans", 1), ("maize", 2)]);
    }
}
