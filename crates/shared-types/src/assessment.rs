use serde::{Deserialize, Serialize};

use crate::serde_helpers::null_as_default;

/// Progress of a field risk assessment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    #[default]
    Pending,
    #[serde(alias = "in-progress", alias = "inProgress")]
    InProgress,
    Completed,
    Rejected,
    #[serde(other)]
    Unknown,
}

pub const ASSESSMENT_STATUSES: &[AssessmentStatus] = &[
    AssessmentStatus::Pending,
    AssessmentStatus::InProgress,
    AssessmentStatus::Completed,
    AssessmentStatus::Rejected,
];

impl AssessmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentStatus::Pending => "pending",
            AssessmentStatus::InProgress => "in_progress",
            AssessmentStatus::Completed => "completed",
            AssessmentStatus::Rejected => "rejected",
            AssessmentStatus::Unknown => "unknown",
        }
    }

    pub fn parse_filter(s: &str) -> Option<Self> {
        ASSESSMENT_STATUSES.iter().copied().find(|st| st.as_str() == s)
    }
}

/// A field assessment of a farm, which can back a new policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub farm_id: String,
    #[serde(default)]
    pub assessor_id: Option<String>,
    #[serde(default)]
    pub farmer_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: AssessmentStatus,
    #[serde(default)]
    pub risk_score: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    /// Set once a policy has been issued from this assessment.
    #[serde(default)]
    pub policy_id: Option<String>,
}

impl Assessment {
    /// Only completed assessments without an issued policy can back a new one.
    pub fn can_issue_policy(&self) -> bool {
        self.status == AssessmentStatus::Completed && self.policy_id.is_none()
    }

    /// Risk band for display; scores are on a 0-100 scale.
    pub fn risk_band(&self) -> &'static str {
        match self.risk_score {
            None => "Not scored",
            Some(s) if s < 34.0 => "Low",
            Some(s) if s < 67.0 => "Medium",
            Some(_) => "High",
        }
    }
}
