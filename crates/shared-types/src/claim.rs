use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::serde_helpers::null_as_default;

/// Review status of a claim.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    #[default]
    Pending,
    Processing,
    Approved,
    Rejected,
    #[serde(other)]
    Unknown,
}

pub const CLAIM_STATUSES: &[ClaimStatus] = &[
    ClaimStatus::Pending,
    ClaimStatus::Processing,
    ClaimStatus::Approved,
    ClaimStatus::Rejected,
];

impl ClaimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "pending",
            ClaimStatus::Processing => "processing",
            ClaimStatus::Approved => "approved",
            ClaimStatus::Rejected => "rejected",
            ClaimStatus::Unknown => "unknown",
        }
    }

    pub fn parse_filter(s: &str) -> Option<Self> {
        CLAIM_STATUSES.iter().copied().find(|st| st.as_str() == s)
    }

    /// Approved and rejected claims are final.
    pub fn is_final(&self) -> bool {
        matches!(self, ClaimStatus::Approved | ClaimStatus::Rejected)
    }
}

/// Kind of loss event a claim reports.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LossEventType {
    Drought,
    Flood,
    Pest,
    Disease,
    Hail,
    Fire,
    #[serde(other)]
    Other,
}

pub const LOSS_EVENT_TYPES: &[LossEventType] = &[
    LossEventType::Drought,
    LossEventType::Flood,
    LossEventType::Pest,
    LossEventType::Disease,
    LossEventType::Hail,
    LossEventType::Fire,
    LossEventType::Other,
];

impl LossEventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LossEventType::Drought => "drought",
            LossEventType::Flood => "flood",
            LossEventType::Pest => "pest",
            LossEventType::Disease => "disease",
            LossEventType::Hail => "hail",
            LossEventType::Fire => "fire",
            LossEventType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LossEventType::Drought => "Drought",
            LossEventType::Flood => "Flood",
            LossEventType::Pest => "Pest infestation",
            LossEventType::Disease => "Crop disease",
            LossEventType::Hail => "Hailstorm",
            LossEventType::Fire => "Fire",
            LossEventType::Other => "Other",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        LOSS_EVENT_TYPES.iter().copied().find(|t| t.as_str() == s)
    }
}

/// A loss claim filed against a policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub policy_id: String,
    #[serde(default)]
    pub farmer_id: Option<String>,
    #[serde(default)]
    pub loss_event_type: Option<LossEventType>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub loss_description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub damage_photos: Vec<String>,
    #[serde(default)]
    pub amount_claimed: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ClaimStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Claim {
    pub fn loss_label(&self) -> &'static str {
        self.loss_event_type
            .map(|t| t.label())
            .unwrap_or("Unspecified")
    }
}

/// Claim form as filled in by a farmer.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ClaimDraft {
    #[validate(length(min = 1, message = "Please select a policy"))]
    pub policy_id: String,
    #[validate(length(min = 1, message = "Please select the type of loss"))]
    pub loss_event_type: String,
    #[validate(length(min = 1, message = "Please describe the loss"))]
    pub loss_description: String,
    /// Newline- or comma-separated photo URLs.
    pub damage_photos: String,
    pub amount_claimed: String,
}

/// Request body for filing a claim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateClaimRequest {
    pub policy_id: String,
    pub loss_event_type: LossEventType,
    pub loss_description: String,
    pub damage_photos: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_claimed: Option<f64>,
}

impl ClaimDraft {
    /// Validate the form and produce the request body. Fails before any
    /// network traffic when a required field is blank.
    pub fn into_request(self) -> Result<CreateClaimRequest, crate::AppError> {
        let policy_id = self.policy_id.trim().to_string();
        if policy_id.is_empty() {
            return Err(crate::AppError::field("policy_id", "Please select a policy"));
        }
        let trimmed = Self {
            policy_id,
            loss_event_type: self.loss_event_type.trim().to_string(),
            loss_description: self.loss_description.trim().to_string(),
            damage_photos: self.damage_photos,
            amount_claimed: self.amount_claimed.trim().to_string(),
        };
        trimmed.validate()?;

        let loss_event_type = LossEventType::from_key(&trimmed.loss_event_type).ok_or_else(|| {
            crate::AppError::field("loss_event_type", "Please select the type of loss")
        })?;
        let amount_claimed = if trimmed.amount_claimed.is_empty() {
            None
        } else {
            Some(crate::policy::parse_amount(&trimmed.amount_claimed).ok_or_else(|| {
                crate::AppError::field("amount_claimed", "Claimed amount must be a positive number")
            })?)
        };

        Ok(CreateClaimRequest {
            policy_id: trimmed.policy_id,
            loss_event_type,
            loss_description: trimmed.loss_description,
            damage_photos: split_photo_urls(&trimmed.damage_photos),
            amount_claimed,
        })
    }
}

/// Split a free-text list of photo URLs on commas and newlines.
pub fn split_photo_urls(raw: &str) -> Vec<String> {
    raw.split([',', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Request body for changing a claim's status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClaimStatusRequest {
    pub status: ClaimStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
