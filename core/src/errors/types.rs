//! Domain-specific error types for authentication and related operations
//!
//! Error messages here are terse English reasons; presentation-layer copy
//! (and any localization) is the API layer's concern.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Password too short (min {min} characters)")]
    PasswordTooShort { min: usize },

    #[error("Email already registered")]
    EmailAlreadyRegistered,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("No verification pending for this email")]
    VerificationNotPending,

    #[error("Invalid verification code")]
    InvalidVerificationCode,

    #[error("Verification code expired")]
    VerificationCodeExpired,

    #[error("Maximum verification attempts exceeded")]
    MaxAttemptsExceeded,

    #[error("Please wait {seconds} seconds before requesting a new code")]
    ResendCooldown { seconds: i64 },

    #[error("No account for this email")]
    UserNotFound,

    #[error("Mail delivery failed")]
    MailDeliveryFailure,

    #[error("Session expired")]
    SessionExpired,
}

/// Input validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid length: {field} (expected: {expected}, actual: {actual})")]
    InvalidLength {
        field: String,
        expected: usize,
        actual: usize,
    },

    #[error("Out of range: {field}")]
    OutOfRange { field: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cooldown_message_carries_remaining_seconds() {
        let error = AuthError::ResendCooldown { seconds: 17 };
        assert!(error.to_string().contains("17 seconds"));
    }

    #[test]
    fn test_validation_error_names_field() {
        let error = ValidationError::InvalidFormat {
            field: "email".to_string(),
        };
        assert!(error.to_string().contains("email"));
    }
}
