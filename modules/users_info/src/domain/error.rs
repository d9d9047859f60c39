use thiserror::Error;
use validator::ValidationErrors;

use crate::contract::model::{NewUser, USERNAME_MAX_LEN, USERNAME_MIN_LEN};

/// Domain-specific errors using thiserror
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid email format: '{email}'")]
    InvalidEmail { email: String },

    #[error("Username length {len} out of range [{min}, {max}]")]
    UsernameLength { len: usize, min: usize, max: usize },

    #[error("Validation failed: {field}: {message}")]
    Validation { field: String, message: String },
}

impl DomainError {
    pub fn invalid_email(email: String) -> Self {
        Self::InvalidEmail { email }
    }

    pub fn username_length(len: usize) -> Self {
        Self::UsernameLength {
            len,
            min: USERNAME_MIN_LEN,
            max: USERNAME_MAX_LEN,
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Collapse validator output into the first failing field, username before email.
    pub fn from_validation(new_user: &NewUser, errors: &ValidationErrors) -> Self {
        let fields = errors.field_errors();
        if fields.contains_key("username") {
            return Self::username_length(new_user.username.chars().count());
        }
        if fields.contains_key("email") {
            return Self::invalid_email(new_user.email.clone());
        }
        Self::validation("user", errors.to_string())
    }
}
