//! Pending password-reset store.

use async_trait::async_trait;

use crate::domain::entities::password_reset::PasswordReset;
use crate::errors::DomainError;

/// Store for pending reset records, keyed uniquely by email
///
/// Same contract as the verification store: upsert supersedes, attempt
/// increments are atomic on the stored row.
#[async_trait]
pub trait PasswordResetRepository: Send + Sync {
    /// Create or overwrite the pending record for its email
    async fn upsert(&self, record: PasswordReset) -> Result<(), DomainError>;

    /// Fetch the pending record for an email
    async fn find_by_email(&self, email: &str) -> Result<Option<PasswordReset>, DomainError>;

    /// Atomically add one attempt; returns the new count
    async fn increment_attempts(&self, email: &str) -> Result<i32, DomainError>;

    /// Delete the pending record; Ok even if none exists
    async fn delete(&self, email: &str) -> Result<(), DomainError>;
}
