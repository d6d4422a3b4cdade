//! Multi-step farmer self-registration.
//!
//! The wizard only moves forward once every required field of the current
//! step is filled in. Whitespace-only values count as blank.

use crate::forms::check_new_password;
use crate::AppError;
use serde::{Deserialize, Serialize};

/// Wizard steps in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum RegistrationStep {
    #[default]
    Personal,
    Location,
    Farm,
    Account,
}

pub const REGISTRATION_STEPS: &[RegistrationStep] = &[
    RegistrationStep::Personal,
    RegistrationStep::Location,
    RegistrationStep::Farm,
    RegistrationStep::Account,
];

impl RegistrationStep {
    pub fn index(self) -> usize {
        match self {
            RegistrationStep::Personal => 0,
            RegistrationStep::Location => 1,
            RegistrationStep::Farm => 2,
            RegistrationStep::Account => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            RegistrationStep::Personal => "Personal details",
            RegistrationStep::Location => "Location",
            RegistrationStep::Farm => "Farm",
            RegistrationStep::Account => "Account",
        }
    }

    pub fn next(self) -> Option<Self> {
        REGISTRATION_STEPS.get(self.index() + 1).copied()
    }

    pub fn prev(self) -> Option<Self> {
        self.index()
            .checked_sub(1)
            .and_then(|i| REGISTRATION_STEPS.get(i).copied())
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    /// Fields that must be non-blank before leaving this step.
    pub fn required_fields(self) -> &'static [RegistrationField] {
        use RegistrationField::*;
        match self {
            RegistrationStep::Personal => &[FirstName, LastName, Phone, Email],
            RegistrationStep::Location => &[Province, District, Sector],
            RegistrationStep::Farm => &[FarmName, CropType, FarmSize],
            RegistrationStep::Account => &[Password, ConfirmPassword],
        }
    }
}

/// Every input of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistrationField {
    FirstName,
    LastName,
    Phone,
    Email,
    Province,
    District,
    Sector,
    FarmName,
    CropType,
    FarmSize,
    Password,
    ConfirmPassword,
}

impl RegistrationField {
    pub fn key(self) -> &'static str {
        match self {
            RegistrationField::FirstName => "first_name",
            RegistrationField::LastName => "last_name",
            RegistrationField::Phone => "phone",
            RegistrationField::Email => "email",
            RegistrationField::Province => "province",
            RegistrationField::District => "district",
            RegistrationField::Sector => "sector",
            RegistrationField::FarmName => "farm_name",
            RegistrationField::CropType => "crop_type",
            RegistrationField::FarmSize => "farm_size",
            RegistrationField::Password => "password",
            RegistrationField::ConfirmPassword => "confirm_password",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RegistrationField::FirstName => "First name",
            RegistrationField::LastName => "Last name",
            RegistrationField::Phone => "Phone number",
            RegistrationField::Email => "Email",
            RegistrationField::Province => "Province",
            RegistrationField::District => "District",
            RegistrationField::Sector => "Sector",
            RegistrationField::FarmName => "Farm name",
            RegistrationField::CropType => "Crop type",
            RegistrationField::FarmSize => "Farm size (hectares)",
            RegistrationField::Password => "Password",
            RegistrationField::ConfirmPassword => "Confirm password",
        }
    }
}

/// Values typed into the wizard so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub province: String,
    pub district: String,
    pub sector: String,
    pub farm_name: String,
    pub crop_type: String,
    pub farm_size: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn get(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::FirstName => &self.first_name,
            RegistrationField::LastName => &self.last_name,
            RegistrationField::Phone => &self.phone,
            RegistrationField::Email => &self.email,
            RegistrationField::Province => &self.province,
            RegistrationField::District => &self.district,
            RegistrationField::Sector => &self.sector,
            RegistrationField::FarmName => &self.farm_name,
            RegistrationField::CropType => &self.crop_type,
            RegistrationField::FarmSize => &self.farm_size,
            RegistrationField::Password => &self.password,
            RegistrationField::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: RegistrationField, value: String) {
        let slot = match field {
            RegistrationField::FirstName => &mut self.first_name,
            RegistrationField::LastName => &mut self.last_name,
            RegistrationField::Phone => &mut self.phone,
            RegistrationField::Email => &mut self.email,
            RegistrationField::Province => &mut self.province,
            RegistrationField::District => &mut self.district,
            RegistrationField::Sector => &mut self.sector,
            RegistrationField::FarmName => &mut self.farm_name,
            RegistrationField::CropType => &mut self.crop_type,
            RegistrationField::FarmSize => &mut self.farm_size,
            RegistrationField::Password => &mut self.password,
            RegistrationField::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value;
    }
}

/// Request body for `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterFarmerRequest {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub role: crate::UserRole,
    pub farmer_profile: crate::FarmerProfile,
    pub farm_name: String,
    pub crop_type: String,
}

/// Wizard state: current step plus the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FarmerRegistration {
    pub step: RegistrationStep,
    pub form: RegistrationForm,
}

impl FarmerRegistration {
    /// Required fields of `step` that are still blank.
    pub fn missing_fields(&self, step: RegistrationStep) -> Vec<RegistrationField> {
        step.required_fields()
            .iter()
            .copied()
            .filter(|f| self.form.get(*f).trim().is_empty())
            .collect()
    }

    pub fn can_advance(&self) -> bool {
        !self.step.is_last() && self.missing_fields(self.step).is_empty()
    }

    /// Move to the next step. Returns whether the step changed; a blocked
    /// advance leaves the state untouched.
    pub fn next_step(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Move back one step. Returns whether the step changed.
    pub fn prev_step(&mut self) -> bool {
        match self.step.prev() {
            Some(prev) => {
                self.step = prev;
                true
            }
            None => false,
        }
    }

    /// Percentage of steps completed, for the progress bar.
    pub fn progress(&self) -> u8 {
        ((self.step.index() + 1) * 100 / REGISTRATION_STEPS.len()) as u8
    }

    /// Validate every step and the password rules, then build the request.
    pub fn into_request(self) -> Result<RegisterFarmerRequest, AppError> {
        for step in REGISTRATION_STEPS {
            if let Some(field) = self.missing_fields(*step).first() {
                return Err(AppError::field(
                    field.key(),
                    format!("{} is required", field.label()),
                ));
            }
        }
        let f = self.form;
        check_new_password(&f.password, &f.confirm_password)?;
        let farm_size = crate::policy::parse_amount(&f.farm_size).ok_or_else(|| {
            AppError::field("farm_size", "Farm size must be a positive number")
        })?;

        Ok(RegisterFarmerRequest {
            first_name: f.first_name.trim().to_string(),
            last_name: f.last_name.trim().to_string(),
            phone: f.phone.trim().to_string(),
            email: f.email.trim().to_string(),
            password: f.password,
            role: crate::UserRole::Farmer,
            farmer_profile: crate::FarmerProfile {
                national_id: None,
                province: Some(f.province.trim().to_string()),
                district: Some(f.district.trim().to_string()),
                sector: Some(f.sector.trim().to_string()),
                farm_size: Some(farm_size),
            },
            farm_name: f.farm_name.trim().to_string(),
            crop_type: f.crop_type.trim().to_string(),
        })
    }
}
