//! Pending email-verification store for the registration flow.

use async_trait::async_trait;

use crate::domain::entities::email_verification::EmailVerification;
use crate::errors::DomainError;

/// Store for pending registration records, keyed uniquely by email
///
/// `upsert` replaces any existing record for the email (a resend supersedes
/// the previous code). `increment_attempts` must be a single atomic
/// increment on the stored row so concurrent guesses cannot share one unit
/// of the attempt budget.
#[async_trait]
pub trait EmailVerificationRepository: Send + Sync {
    /// Create or overwrite the pending record for its email
    async fn upsert(&self, record: EmailVerification) -> Result<(), DomainError>;

    /// Fetch the pending record for an email
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<EmailVerification>, DomainError>;

    /// Atomically add one attempt; returns the new count
    async fn increment_attempts(&self, email: &str) -> Result<i32, DomainError>;

    /// Delete the pending record; Ok even if none exists
    async fn delete(&self, email: &str) -> Result<(), DomainError>;
}
