use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::serde_helpers::null_as_default;

/// Lifecycle status of an insurance policy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[serde(rename_all = "lowercase")]
pub enum PolicyStatus {
    Active,
    #[default]
    Pending,
    Expired,
    Inactive,
    #[serde(other)]
    Unknown,
}

/// Statuses selectable in filters and status menus.
pub const POLICY_STATUSES: &[PolicyStatus] = &[
    PolicyStatus::Active,
    PolicyStatus::Pending,
    PolicyStatus::Expired,
    PolicyStatus::Inactive,
];

impl PolicyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyStatus::Active => "active",
            PolicyStatus::Pending => "pending",
            PolicyStatus::Expired => "expired",
            PolicyStatus::Inactive => "inactive",
            PolicyStatus::Unknown => "unknown",
        }
    }

    /// Parse a filter value. Empty or unknown strings mean "no filter".
    pub fn parse_filter(s: &str) -> Option<Self> {
        POLICY_STATUSES.iter().copied().find(|st| st.as_str() == s)
    }
}

/// An insurance policy covering one farm's crop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub policy_number: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub farmer_id: String,
    #[serde(default)]
    pub farm_id: Option<String>,
    #[serde(default)]
    pub assessment_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub crop_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub coverage_amount: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub premium: f64,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: PolicyStatus,
}

impl Policy {
    /// Reference shown in tables: the policy number, else a short id.
    pub fn reference(&self) -> String {
        match &self.policy_number {
            Some(n) if !n.trim().is_empty() => n.clone(),
            _ => short_id(&self.id),
        }
    }

    /// Whether a claim can be filed against this policy.
    pub fn is_claimable(&self) -> bool {
        self.status == PolicyStatus::Active
    }

    /// Days from `today` until the policy ends, if the end date parses.
    pub fn days_remaining(&self, today: NaiveDate) -> Option<i64> {
        let end = parse_date(self.end_date.as_deref()?)?;
        Some((end - today).num_days())
    }
}

/// First eight characters of an identifier, for compact display.
pub fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

/// Parse `YYYY-MM-DD` or an RFC 3339 timestamp into a date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().or_else(|| {
        chrono::DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.date_naive())
    })
}

/// Policy form as filled in by an admin or insurer.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct PolicyDraft {
    #[validate(length(min = 1, message = "Farmer is required"))]
    pub farmer_id: String,
    pub farm_id: String,
    #[validate(length(min = 1, message = "Crop type is required"))]
    pub crop_type: String,
    #[validate(length(min = 1, message = "Coverage amount is required"))]
    pub coverage_amount: String,
    #[validate(length(min = 1, message = "Premium is required"))]
    pub premium: String,
    #[validate(length(min = 1, message = "Start date is required"))]
    pub start_date: String,
    #[validate(length(min = 1, message = "End date is required"))]
    pub end_date: String,
}

/// Request body for creating a policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePolicyRequest {
    pub farmer_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farm_id: Option<String>,
    pub crop_type: String,
    pub coverage_amount: f64,
    pub premium: f64,
    pub start_date: String,
    pub end_date: String,
}

impl PolicyDraft {
    /// Check required fields, amounts and the date range, producing the
    /// request body.
    pub fn into_request(self) -> Result<CreatePolicyRequest, crate::AppError> {
        let trimmed = Self {
            farmer_id: self.farmer_id.trim().to_string(),
            farm_id: self.farm_id.trim().to_string(),
            crop_type: self.crop_type.trim().to_string(),
            coverage_amount: self.coverage_amount.trim().to_string(),
            premium: self.premium.trim().to_string(),
            start_date: self.start_date.trim().to_string(),
            end_date: self.end_date.trim().to_string(),
        };
        trimmed.validate()?;

        let terms = check_terms(
            &trimmed.coverage_amount,
            &trimmed.premium,
            &trimmed.start_date,
            &trimmed.end_date,
        )?;

        Ok(CreatePolicyRequest {
            farmer_id: trimmed.farmer_id,
            farm_id: (!trimmed.farm_id.is_empty()).then_some(trimmed.farm_id),
            crop_type: trimmed.crop_type,
            coverage_amount: terms.coverage_amount,
            premium: terms.premium,
            start_date: terms.start_date,
            end_date: terms.end_date,
        })
    }
}

/// Amounts must be positive and the period must end after it starts.
fn check_terms(
    coverage_amount: &str,
    premium: &str,
    start_date: &str,
    end_date: &str,
) -> Result<IssuePolicyRequest, crate::AppError> {
    let coverage_amount = parse_amount(coverage_amount).ok_or_else(|| {
        crate::AppError::field("coverage_amount", "Coverage amount must be a positive number")
    })?;
    let premium = parse_amount(premium)
        .ok_or_else(|| crate::AppError::field("premium", "Premium must be a positive number"))?;
    let start = parse_date(start_date)
        .ok_or_else(|| crate::AppError::field("start_date", "Start date is not a valid date"))?;
    let end = parse_date(end_date)
        .ok_or_else(|| crate::AppError::field("end_date", "End date is not a valid date"))?;
    if end <= start {
        return Err(crate::AppError::field(
            "end_date",
            "End date must be after the start date",
        ));
    }
    Ok(IssuePolicyRequest {
        coverage_amount,
        premium,
        start_date: start.to_string(),
        end_date: end.to_string(),
    })
}

/// Parse a strictly positive amount, tolerating thousands separators.
pub fn parse_amount(s: &str) -> Option<f64> {
    s.replace(',', "")
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// Request body for changing a policy's status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdatePolicyStatusRequest {
    pub status: PolicyStatus,
}

/// Request body for issuing a policy from a completed assessment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IssuePolicyRequest {
    pub coverage_amount: f64,
    pub premium: f64,
    pub start_date: String,
    pub end_date: String,
}

/// Terms entered when issuing a policy from an assessment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssuePolicyDraft {
    pub coverage_amount: String,
    pub premium: String,
    pub start_date: String,
    pub end_date: String,
}

impl IssuePolicyDraft {
    pub fn into_request(self) -> Result<IssuePolicyRequest, crate::AppError> {
        check_terms(
            &self.coverage_amount,
            &self.premium,
            &self.start_date,
            &self.end_date,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft() -> PolicyDraft {
        PolicyDraft {
            farmer_id: "f-1".into(),
            farm_id: "".into(),
            crop_type: "maize".into(),
            coverage_amount: "1,500,000".into(),
            premium: "45000".into(),
            start_date: "2026-03-01".into(),
            end_date: "2026-09-30".into(),
        }
    }

    #[test]
    fn unknown_status_maps_to_unknown() {
        let p: Policy = serde_json::from_value(json!({"id": "p", "status": "suspended"})).unwrap();
        assert_eq!(p.status, PolicyStatus::Unknown);
        let p: Policy = serde_json::from_value(json!({"_id": "p", "status": "expired"})).unwrap();
        assert_eq!(p.status, PolicyStatus::Expired);
    }

    #[test]
    fn parse_filter_ignores_blank() {
        assert_eq!(PolicyStatus::parse_filter(""), None);
        assert_eq!(PolicyStatus::parse_filter("active"), Some(PolicyStatus::Active));
        assert_eq!(PolicyStatus::parse_filter("unknown"), None);
    }

    #[test]
    fn draft_into_request_parses_amounts() {
        let req = draft().into_request().unwrap();
        assert_eq!(req.coverage_amount, 1_500_000.0);
        assert_eq!(req.premium, 45_000.0);
        assert_eq!(req.farm_id, None);
        assert_eq!(req.start_date, "2026-03-01");
    }

    #[test]
    fn draft_rejects_missing_crop() {
        let mut d = draft();
        d.crop_type = "   ".into();
        let err = d.into_request().unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.field_errors.get("crop_type").unwrap(), "Crop type is required");
    }

    #[test]
    fn draft_rejects_inverted_dates() {
        let mut d = draft();
        d.end_date = "2026-01-01".into();
        let err = d.into_request().unwrap_err();
        assert_eq!(err.message, "End date must be after the start date");
    }

    #[test]
    fn draft_rejects_non_positive_premium() {
        let mut d = draft();
        d.premium = "0".into();
        assert!(d.into_request().is_err());
    }

    #[test]
    fn days_remaining_handles_rfc3339() {
        let p: Policy = serde_json::from_value(json!({
            "id": "p", "endDate": "2026-10-29T00:00:00Z"
        }))
        .unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(p.days_remaining(today), Some(10));
    }

    #[test]
    fn reference_prefers_policy_number() {
        let mut p: Policy =
            serde_json::from_value(json!({"id": "abcdef1234567"})).unwrap();
        assert_eq!(p.reference(), "abcdef12");
        p.policy_number = Some("POL-2026-001".into());
        assert_eq!(p.reference(), "POL-2026-001");
    }

    #[test]
    fn issue_draft_checks_terms() {
        let ok = IssuePolicyDraft {
            coverage_amount: "1,500,000".into(),
            premium: "45000".into(),
            start_date: "2026-03-01".into(),
            end_date: "2027-02-28".into(),
        }
        .into_request()
        .unwrap();
        assert_eq!(ok.coverage_amount, 1_500_000.0);
        assert_eq!(ok.end_date, "2027-02-28");

        let err = IssuePolicyDraft {
            coverage_amount: "0".into(),
            ..IssuePolicyDraft::default()
        }
        .into_request()
        .unwrap_err();
        assert!(err.field_errors.contains_key("coverage_amount"));
    }
}
