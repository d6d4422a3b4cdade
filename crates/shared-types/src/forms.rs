use crate::{AppError, ChangePasswordRequest, CreateUserRequest, UserRole};
use validator::Validate;

/// Shortest password accepted by the change-password and registration forms.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Settings page password form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChange {
    /// Checks run in order: every field filled, confirmation matches, then
    /// minimum length. The first failure is reported.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.current_password.is_empty()
            || self.new_password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(AppError::bad_request("All password fields are required"));
        }
        check_new_password(&self.new_password, &self.confirm_password)
    }

    pub fn into_request(self) -> Result<ChangePasswordRequest, AppError> {
        self.validate()?;
        Ok(ChangePasswordRequest {
            current_password: self.current_password,
            new_password: self.new_password,
        })
    }
}

/// Confirmation match then length, shared with registration.
pub(crate) fn check_new_password(password: &str, confirm: &str) -> Result<(), AppError> {
    if password != confirm {
        return Err(AppError::field("confirm_password", "New passwords do not match"));
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::field(
            "new_password",
            format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
        ));
    }
    Ok(())
}

/// Admin "create user" form.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct UserDraft {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone: String,
    pub role: UserRole,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

impl UserDraft {
    pub fn into_request(self) -> Result<CreateUserRequest, AppError> {
        let trimmed = Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            role: self.role,
            password: self.password,
        };
        trimmed.validate()?;
        Ok(CreateUserRequest {
            first_name: trimmed.first_name,
            last_name: trimmed.last_name,
            email: trimmed.email,
            phone: trimmed.phone,
            role: trimmed.role,
            password: trimmed.password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(current: &str, new: &str, confirm: &str) -> PasswordChange {
        PasswordChange {
            current_password: current.into(),
            new_password: new.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    fn rejects_any_empty_field() {
        for f in [
            form("", "longenough", "longenough"),
            form("old", "", "longenough"),
            form("old", "longenough", ""),
        ] {
            let err = f.validate().unwrap_err();
            assert_eq!(err.message, "All password fields are required");
        }
    }

    #[test]
    fn rejects_mismatch_before_length() {
        let err = form("old", "short", "shorter").validate().unwrap_err();
        assert_eq!(err.message, "New passwords do not match");
    }

    #[test]
    fn rejects_short_password() {
        let err = form("old", "seven77", "seven77").validate().unwrap_err();
        assert_eq!(err.message, "Password must be at least 8 characters");
        assert!(err.field_errors.contains_key("new_password"));
    }

    #[test]
    fn accepts_valid_change() {
        let req = form("old", "eight888", "eight888").into_request().unwrap();
        assert_eq!(req.current_password, "old");
        assert_eq!(req.new_password, "eight888");
    }

    #[test]
    fn user_draft_checks_email() {
        let err = UserDraft {
            first_name: "Ada".into(),
            last_name: "K".into(),
            email: "not-an-email".into(),
            phone: "0788000000".into(),
            role: UserRole::Insurer,
            password: "password1".into(),
        }
        .into_request()
        .unwrap_err();
        assert_eq!(err.field_errors.get("email").unwrap(), "Enter a valid email address");
    }

    #[test]
    fn user_draft_builds_request() {
        let req = UserDraft {
            first_name: " Ada ".into(),
            last_name: "K".into(),
            email: "ada@example.com".into(),
            phone: "0788000000".into(),
            role: UserRole::Assessor,
            password: "password1".into(),
        }
        .into_request()
        .unwrap();
        assert_eq!(req.first_name, "Ada");
        assert_eq!(req.role, UserRole::Assessor);
    }
}
