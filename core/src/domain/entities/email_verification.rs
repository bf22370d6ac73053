//! Pending email verification record for the registration flow.
//!
//! At most one record exists per email. The record carries the candidate
//! password hash until the address is confirmed, at which point it is
//! promoted into a permanent [`super::user::User`] and deleted.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Pending registration awaiting email confirmation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailVerification {
    /// Normalized email address (unique key)
    pub email: String,

    /// bcrypt hash of the candidate password, applied on confirmation
    pub password_hash: String,

    /// Hex SHA-256 digest of the current one-time code
    pub code_hash: String,

    /// Instant after which the code is unusable
    pub expires_at: DateTime<Utc>,

    /// Comparisons made against the current code, successful ones included
    pub attempts: i32,

    /// When the current code was dispatched; gates resend frequency
    pub last_sent_at: DateTime<Utc>,
}

impl EmailVerification {
    /// Creates a fresh pending record for a newly issued code
    pub fn new(
        email: String,
        password_hash: String,
        code_hash: String,
        ttl_minutes: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            email,
            password_hash,
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

    fn pending() -> EmailVerification {
        EmailVerification::new(
            "user@example.com".to_string(),
            "pw-hash".to_string(),
            "code-hash".to_string(),
            10,
        )
    }

    #[test]
    fn test_fresh_record() {
        let record = pending();
        assert_eq!(record.attempts, 0);
        assert!(!record.is_expired());
        assert_eq!(record.expires_at, record.last_sent_at + Duration::minutes(10));
    }

    #[test]
    fn test_expiry() {
        let mut record = pending();
        record.expires_at = Utc::now() - Duration::seconds(1);
        assert!(record.is_expired());
    }
}
