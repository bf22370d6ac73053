//! Pending password reset record.
//!
//! Same lifecycle as [`super::email_verification::EmailVerification`] but it
//! targets an existing account, so no candidate password is captured at
//! request time; the new password arrives with the confirmation.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Pending password reset awaiting code confirmation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordReset {
    /// Normalized email address (unique key)
    pub email: String,

    /// Hex SHA-256 digest of the current one-time code
    pub code_hash: String,

    /// Instant after which the code is unusable
    pub expires_at: DateTime<Utc>,

    /// Comparisons made against the current code, successful ones included
    pub attempts: i32,

    /// When the current code was dispatched; gates resend frequency
    pub last_sent_at: DateTime<Utc>,
}

impl PasswordReset {
    /// Creates a fresh pending record for a newly issued code
    pub fn new(email: String, code_hash: String, ttl_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            email,
            code_hash,
            expires_at: now + Duration::minutes(ttl_minutes),
            attempts: 0,
            last_sent_at: now,
        }
    }

    /// Whether the current code has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_record() {
        let record =
            PasswordReset::new("user@example.com".to_string(), "hash".to_string(), 10);
        assert!(!record.is_expired());
        assert_eq!(record.attempts, 0);
    }

    #[test]
    fn test_backdated_record_expires() {
        let mut record =
            PasswordReset::new("user@example.com".to_string(), "hash".to_string(), 10);
        record.expires_at = Utc::now() - Duration::minutes(1);
        assert!(record.is_expired());
    }
}
