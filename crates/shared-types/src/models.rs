use serde::{Deserialize, Deserializer, Serialize};

use crate::serde_helpers::{null_as_default, null_as_true};

/// Platform role. Decides which dashboard a user lands on and which profile
/// sub-object of [`User`] is relevant.
///
/// Deserialization is case-insensitive and never fails on a string: unknown
/// roles fall back to `Farmer` (see [`UserRole::from_str_or_default`]).
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    #[default]
    Farmer,
    Assessor,
    Insurer,
    Government,
    Admin,
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map_or_else(UserRole::default, |s| UserRole::from_str_or_default(&s)))
    }
}

/// All roles in display order.
pub const ALL_ROLES: &[UserRole] = &[
    UserRole::Farmer,
    UserRole::Assessor,
    UserRole::Insurer,
    UserRole::Government,
    UserRole::Admin,
];

impl UserRole {
    /// Parse a role string from the API or storage. Unknown values default to
    /// `Farmer`, the least privileged dashboard.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "ASSESSOR" => UserRole::Assessor,
            "INSURER" => UserRole::Insurer,
            "GOVERNMENT" => UserRole::Government,
            "ADMIN" => UserRole::Admin,
            _ => UserRole::Farmer,
        }
    }

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Farmer => "FARMER",
            UserRole::Assessor => "ASSESSOR",
            UserRole::Insurer => "INSURER",
            UserRole::Government => "GOVERNMENT",
            UserRole::Admin => "ADMIN",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Farmer => "Farmer",
            UserRole::Assessor => "Assessor",
            UserRole::Insurer => "Insurer",
            UserRole::Government => "Government",
            UserRole::Admin => "Admin",
        }
    }
}

/// Farmer-specific profile data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FarmerProfile {
    pub national_id: Option<String>,
    pub province: Option<String>,
    pub district: Option<String>,
    pub sector: Option<String>,
    pub farm_size: Option<f64>,
}

/// Assessor-specific profile data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AssessorProfile {
    pub license_number: Option<String>,
    pub specialization: Option<String>,
    pub region: Option<String>,
}

/// Insurer-specific profile data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct InsurerProfile {
    pub company_name: Option<String>,
    pub registration_number: Option<String>,
}

fn default_true() -> bool {
    true
}

/// A platform account as returned by the users endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, alias = "phoneNumber", deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: UserRole,
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub farmer_profile: Option<FarmerProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessor_profile: Option<AssessorProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurer_profile: Option<InsurerProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Profile sub-object selected by role.
#[derive(Debug, Clone, PartialEq)]
pub enum RoleProfile<'a> {
    Farmer(&'a FarmerProfile),
    Assessor(&'a AssessorProfile),
    Insurer(&'a InsurerProfile),
    None,
}

impl User {
    /// "First Last", falling back to the email, then to a placeholder.
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string();
        if !name.is_empty() {
            name
        } else if !self.email.trim().is_empty() {
            self.email.clone()
        } else {
            "Unknown user".to_string()
        }
    }

    /// The profile relevant to this user's role.
    pub fn profile(&self) -> RoleProfile<'_> {
        match self.role {
            UserRole::Farmer => self
                .farmer_profile
                .as_ref()
                .map_or(RoleProfile::None, RoleProfile::Farmer),
            UserRole::Assessor => self
                .assessor_profile
                .as_ref()
                .map_or(RoleProfile::None, RoleProfile::Assessor),
            UserRole::Insurer => self
                .insurer_profile
                .as_ref()
                .map_or(RoleProfile::None, RoleProfile::Insurer),
            UserRole::Government | UserRole::Admin => RoleProfile::None,
        }
    }
}

/// Flattened row for the admin users table.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
    pub status: &'static str,
    pub detail: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        let detail = match user.profile() {
            RoleProfile::Farmer(p) => p.district.clone().unwrap_or_default(),
            RoleProfile::Assessor(p) => p.license_number.clone().unwrap_or_default(),
            RoleProfile::Insurer(p) => p.company_name.clone().unwrap_or_default(),
            RoleProfile::None => String::new(),
        };
        Self {
            id: user.id.clone(),
            name: user.display_name(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            role: user.role,
            status: if user.active { "active" } else { "inactive" },
            detail,
        }
    }
}

/// Request body for creating a user from the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
    pub password: String,
}

/// Request body for toggling a user's active flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SetUserActiveRequest {
    pub active: bool,
}

/// Identity of the signed-in user, threaded through the UI as an explicit
/// context value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub user_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: UserRole,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_name: String,
}

impl Session {
    /// Build a session from a login response's token and user record.
    pub fn from_login(token: String, user: &User) -> Self {
        Self {
            token,
            user_id: user.id.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            role: user.role,
            display_name: user.display_name(),
        }
    }

    /// Two-letter initials for the avatar fallback.
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    /// Email or phone number.
    pub identifier: String,
    pub password: String,
}

/// Login response payload (after unwrapping).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(alias = "accessToken")]
    pub token: String,
    pub user: User,
}

/// Password change request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Generic acknowledgement returned by mutation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct MessageResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
}

/// Aggregated platform statistics from the admin stats endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_users: u64,
    pub total_farmers: u64,
    pub total_policies: u64,
    pub active_policies: u64,
    pub total_claims: u64,
    pub pending_claims: u64,
    pub total_farms: u64,
}
