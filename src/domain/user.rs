//! User record and input form.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::config::MAX_USERNAME_LENGTH;

/// A row of the users table.
///
/// The password is plain text, exactly as stored. It is never serialized;
/// callers that need to show it (the edit flow) read the field directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl User {
    pub fn new(id: i32, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password: password.into(),
        }
    }
}

/// User creation/update input
#[derive(Debug, Clone, Validate)]
pub struct UserForm {
    #[validate(
        length(min = 1, message = "Please enter username!"),
        custom(function = "validate_username_length")
    )]
    pub username: String,
    #[validate(length(min = 1, message = "Please enter password!"))]
    pub password: String,
}

impl UserForm {
    /// The username is trimmed; the password is kept byte for byte.
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.trim().to_string(),
            password: password.to_string(),
        }
    }
}

fn validate_username_length(username: &str) -> Result<(), ValidationError> {
    if username.chars().count() as u64 <= MAX_USERNAME_LENGTH {
        return Ok(());
    }
    let mut err = ValidationError::new("username_too_long");
    err.message =
        Some(format!("Username must be {MAX_USERNAME_LENGTH} characters or less!").into());
    Err(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_trims_username_only() {
        let form = UserForm::new("  alice ", " pw ");
        assert_eq!(form.username, "alice");
        assert_eq!(form.password, " pw ");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_empty_fields_rejected() {
        assert!(UserForm::new("", "pw").validate().is_err());
        assert!(UserForm::new("   ", "pw").validate().is_err());
        assert!(UserForm::new("alice", "").validate().is_err());
    }

    #[test]
    fn test_username_length_limit() {
        assert!(UserForm::new(&"a".repeat(50), "pw").validate().is_ok());
        assert!(UserForm::new(&"a".repeat(51), "pw").validate().is_err());
    }

    #[test]
    fn test_password_not_serialized() {
        let user = User::new(1, "alice", "secret");
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("alice"));
        assert!(!json.contains("secret"));
    }
}
