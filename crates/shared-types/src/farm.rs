use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::serde_helpers::null_as_default;

/// Where a farm is. Older records store free text, newer ones the
/// administrative breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FarmLocation {
    Named(String),
    Detailed {
        #[serde(default, deserialize_with = "null_as_default")]
        province: String,
        #[serde(default, deserialize_with = "null_as_default")]
        district: String,
        #[serde(default, deserialize_with = "null_as_default")]
        sector: String,
    },
}

impl fmt::Display for FarmLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FarmLocation::Named(name) => write!(f, "{name}"),
            FarmLocation::Detailed {
                province,
                district,
                sector,
            } => {
                let parts: Vec<&str> = [sector, district, province]
                    .into_iter()
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .collect();
                write!(f, "{}", parts.join(", "))
            }
        }
    }
}

/// A registered farm.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Farm {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub farmer_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub crop_type: String,
    /// Area in hectares.
    #[serde(default, alias = "size", deserialize_with = "null_as_default")]
    pub area: f64,
    #[serde(default)]
    pub location: Option<FarmLocation>,
}

impl Farm {
    pub fn location_label(&self) -> String {
        self.location
            .as_ref()
            .map(|l| l.to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "Not specified".to_string())
    }
}

/// Keep only the farms owned by `farmer_id`.
///
/// The farms endpoint does not filter by owner, so the farmer view narrows
/// the list on the client.
pub fn farms_for_farmer(farms: Vec<Farm>, farmer_id: &str) -> Vec<Farm> {
    farms
        .into_iter()
        .filter(|f| f.farmer_id == farmer_id)
        .collect()
}

/// Total area in hectares.
pub fn total_area(farms: &[Farm]) -> f64 {
    farms.iter().map(|f| f.area).sum()
}

/// Farm registration form.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct FarmDraft {
    #[validate(length(min = 1, message = "Farm name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Crop type is required"))]
    pub crop_type: String,
    #[validate(length(min = 1, message = "Farm area is required"))]
    pub area: String,
    #[validate(length(min = 1, message = "Province is required"))]
    pub province: String,
    #[validate(length(min = 1, message = "District is required"))]
    pub district: String,
    pub sector: String,
}

/// Request body for registering a farm.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateFarmRequest {
    pub farmer_id: String,
    pub name: String,
    pub crop_type: String,
    pub area: f64,
    pub location: FarmLocation,
}

impl FarmDraft {
    pub fn into_request(self, farmer_id: &str) -> Result<CreateFarmRequest, crate::AppError> {
        let trimmed = Self {
            name: self.name.trim().to_string(),
            crop_type: self.crop_type.trim().to_string(),
            area: self.area.trim().to_string(),
            province: self.province.trim().to_string(),
            district: self.district.trim().to_string(),
            sector: self.sector.trim().to_string(),
        };
        trimmed.validate()?;
        let area = crate::policy::parse_amount(&trimmed.area)
            .ok_or_else(|| crate::AppError::field("area", "Farm area must be a positive number"))?;

        Ok(CreateFarmRequest {
            farmer_id: farmer_id.to_string(),
            name: trimmed.name,
            crop_type: trimmed.crop_type,
            area,
            location: FarmLocation::Detailed {
                province: trimmed.province,
                district: trimmed.district,
                sector: trimmed.sector,
            },
        })
    }
}
