use thiserror::Error;

/// Errors that are safe to expose to other modules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsersInfoError {
    #[error("Validation error: {field}: {message}")]
    Validation { field: String, message: String },
}

impl UsersInfoError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<crate::domain::error::DomainError> for UsersInfoError {
    fn from(domain_error: crate::domain::error::DomainError) -> Self {
        use crate::domain::error::DomainError::*;
        match domain_error {
            InvalidEmail { email } => {
                Self::validation("email", format!("'{email}' must contain '@'"))
            }
            UsernameLength { len, min, max } => {
                Self::validation("username", format!("length {len} is outside [{min}, {max}]"))
            }
            Validation { field, message } => Self::validation(field, message),
        }
    }
}
