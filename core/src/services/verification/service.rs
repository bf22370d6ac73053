//! Main verification service implementation
//!
//! State machine per email and flow:
//! `absent -> pending -> {consumed | expired | superseded}`, with a
//! recoverable locked state once the attempt budget is spent. See the
//! individual methods for the transitions they perform.

use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::domain::entities::email_verification::EmailVerification;
use crate::domain::entities::one_time_code::{
    self, digest_matches, normalize_code, OneTimeCode, CODE_LENGTH,
};
use crate::domain::entities::password_reset::PasswordReset;
use crate::errors::{AuthError, DomainResult, ValidationError};
use crate::repositories::{EmailVerificationRepository, PasswordResetRepository};
use crate::services::auth::mask_email;

use super::config::VerificationServiceConfig;
use super::traits::MailServiceTrait;
use super::types::IssueCodeResult;

/// Verification service handling one-time codes for both email flows
pub struct VerificationService<V, R, M>
where
    V: EmailVerificationRepository,
    R: PasswordResetRepository,
    M: MailServiceTrait,
{
    /// Pending registration store
    verification_repository: Arc<V>,
    /// Pending reset store
    reset_repository: Arc<R>,
    /// Out-of-band delivery channel
    mail_service: Arc<M>,
    /// Service configuration
    config: VerificationServiceConfig,
}

impl<V, R, M> VerificationService<V, R, M>
where
    V: EmailVerificationRepository,
    R: PasswordResetRepository,
    M: MailServiceTrait,
{
    /// Create a new verification service
    pub fn new(
        verification_repository: Arc<V>,
        reset_repository: Arc<R>,
        mail_service: Arc<M>,
        config: VerificationServiceConfig,
    ) -> Self {
        Self {
            verification_repository,
            reset_repository,
            mail_service,
            config,
        }
    }

    /// Issue a registration code for an email with a candidate password hash
    ///
    /// Enforces the resend cooldown against any existing pending record,
    /// then upserts a fresh record (attempts reset, expiry extended, old
    /// code superseded) and dispatches the new code.
    pub async fn issue_registration_code(
        &self,
        email: &str,
        password_hash: String,
    ) -> DomainResult<IssueCodeResult> {
        if let Some(existing) = self.verification_repository.find_by_email(email).await? {
            self.check_cooldown(email, existing.last_sent_at)?;
        }

        let code = OneTimeCode::generate();
        let record = EmailVerification::new(
            email.to_string(),
            password_hash,
            code.digest(),
            self.config.code_ttl_minutes,
        );

        tracing::info!(
            email = %mask_email(email),
            event = "verification_code_issued",
            "Issued registration verification code"
        );

        self.verification_repository.upsert(record).await?;

        let message_id = self
            .mail_service
            .send_verification_code(email, code.as_str())
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %mask_email(email),
                    error = %e,
                    event = "mail_delivery_failed",
                    "Failed to deliver verification code"
                );
                AuthError::MailDeliveryFailure
            })?;

        Ok(IssueCodeResult {
            message_id,
            next_resend_at: Utc::now() + Duration::seconds(self.config.resend_cooldown_seconds),
        })
    }

    /// Issue a password reset code for an existing account's email
    pub async fn issue_reset_code(&self, email: &str) -> DomainResult<IssueCodeResult> {
        if let Some(existing) = self.reset_repository.find_by_email(email).await? {
            self.check_cooldown(email, existing.last_sent_at)?;
        }

        let code = OneTimeCode::generate();
        let record = PasswordReset::new(
            email.to_string(),
            code.digest(),
            self.config.code_ttl_minutes,
        );

        tracing::info!(
            email = %mask_email(email),
            event = "reset_code_issued",
            "Issued password reset code"
        );

        self.reset_repository.upsert(record).await?;

        let message_id = self
            .mail_service
            .send_password_reset_code(email, code.as_str())
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %mask_email(email),
                    error = %e,
                    event = "mail_delivery_failed",
                    "Failed to deliver reset code"
                );
                AuthError::MailDeliveryFailure
            })?;

        Ok(IssueCodeResult {
            message_id,
            next_resend_at: Utc::now() + Duration::seconds(self.config.resend_cooldown_seconds),
        })
    }

    /// Validate a registration code against the pending record
    ///
    /// Walks the full state machine: missing record, expiry (deletes the
    /// record, terminal), exhausted attempt budget (no comparison, no
    /// increment), then one atomic attempt increment before the comparison
    /// outcome is reported. On success the pending record is returned so the
    /// caller can promote it; it stays stored until [`Self::consume_registration`].
    pub async fn check_registration_code(
        &self,
        email: &str,
        code: &str,
    ) -> DomainResult<EmailVerification> {
        let code = Self::validated_code(code)?;

        let record = self
            .verification_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::VerificationNotPending)?;

        if record.is_expired() {
            self.verification_repository.delete(email).await?;
            tracing::warn!(
                email = %mask_email(email),
                event = "verification_code_expired",
                "Verification code expired; pending record removed"
            );
            return Err(AuthError::VerificationCodeExpired.into());
        }

        if record.attempts >= self.config.max_attempts {
            tracing::warn!(
                email = %mask_email(email),
                attempts = record.attempts,
                event = "verification_attempts_exhausted",
                "Attempt budget spent; rejecting without comparison"
            );
            return Err(AuthError::MaxAttemptsExceeded.into());
        }

        // Every real comparison consumes one unit of the budget, match or not
        self.verification_repository.increment_attempts(email).await?;

        if !digest_matches(&one_time_code::digest_code(&code), &record.code_hash) {
            tracing::warn!(
                email = %mask_email(email),
                event = "verification_code_mismatch",
                "Verification code did not match"
            );
            return Err(AuthError::InvalidVerificationCode.into());
        }

        Ok(record)
    }

    /// Validate a reset code against the pending record
    ///
    /// Same state machine as [`Self::check_registration_code`].
    pub async fn check_reset_code(
        &self,
        email: &str,
        code: &str,
    ) -> DomainResult<PasswordReset> {
        let code = Self::validated_code(code)?;

        let record = self
            .reset_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::VerificationNotPending)?;

        if record.is_expired() {
            self.reset_repository.delete(email).await?;
            tracing::warn!(
                email = %mask_email(email),
                event = "reset_code_expired",
                "Reset code expired; pending record removed"
            );
            return Err(AuthError::VerificationCodeExpired.into());
        }

        if record.attempts >= self.config.max_attempts {
            tracing::warn!(
                email = %mask_email(email),
                attempts = record.attempts,
                event = "reset_attempts_exhausted",
                "Attempt budget spent; rejecting without comparison"
            );
            return Err(AuthError::MaxAttemptsExceeded.into());
        }

        self.reset_repository.increment_attempts(email).await?;

        if !digest_matches(&one_time_code::digest_code(&code), &record.code_hash) {
            tracing::warn!(
                email = %mask_email(email),
                event = "reset_code_mismatch",
                "Reset code did not match"
            );
            return Err(AuthError::InvalidVerificationCode.into());
        }

        Ok(record)
    }

    /// Delete the pending registration record after its side effect applied
    pub async fn consume_registration(&self, email: &str) -> DomainResult<()> {
        self.verification_repository.delete(email).await
    }

    /// Delete the pending reset record after its side effect applied
    pub async fn consume_reset(&self, email: &str) -> DomainResult<()> {
        self.reset_repository.delete(email).await
    }

    /// Reject a resend while the cooldown window is open
    fn check_cooldown(
        &self,
        email: &str,
        last_sent_at: chrono::DateTime<Utc>,
    ) -> DomainResult<()> {
        let elapsed = (Utc::now() - last_sent_at).num_seconds();
        let remaining = self.config.resend_cooldown_seconds - elapsed;
        if remaining > 0 {
            tracing::warn!(
                email = %mask_email(email),
                remaining = remaining,
                event = "resend_cooldown_active",
                "Code resend requested during cooldown"
            );
            return Err(AuthError::ResendCooldown { seconds: remaining }.into());
        }
        Ok(())
    }

    /// Normalize user input and reject malformed codes without store access
    fn validated_code(input: &str) -> DomainResult<String> {
        let code = normalize_code(input);
        if !one_time_code::is_well_formed(&code) {
            return Err(ValidationError::InvalidLength {
                field: "code".to_string(),
                expected: CODE_LENGTH,
                actual: code.len(),
            }
            .into());
        }
        Ok(code)
    }
}
