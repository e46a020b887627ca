//! User payload validation

use thiserror::Error;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

/// Errors that can occur while validating a user payload
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Name cannot be blank")]
    BlankName,

    #[error("Email cannot be blank")]
    BlankEmail,

    #[error("Email '{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("Invalid field '{field}': {message}")]
    Other { field: String, message: String },
}

pub(crate) const BLANK_CODE: &str = "blank";

/// Rejects empty and whitespace-only strings
pub(crate) fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(BLANK_CODE));
    }

    Ok(())
}

/// Collapse `validator` output into the first error, fields in a fixed order
pub(crate) fn first_error(errors: &ValidationErrors, email: &str) -> UserValidationError {
    let field_errors = errors.errors();

    for field in ["name", "email"] {
        let Some(ValidationErrorsKind::Field(list)) = field_errors.get(field) else {
            continue;
        };
        if list.is_empty() {
            continue;
        }

        return match field {
            "name" => UserValidationError::BlankName,
            _ if list.iter().any(|e| e.code == BLANK_CODE) => UserValidationError::BlankEmail,
            _ => UserValidationError::InvalidEmail(email.to_string()),
        };
    }

    UserValidationError::Other {
        field: "payload".to_string(),
        message: errors.to_string(),
    }
}
