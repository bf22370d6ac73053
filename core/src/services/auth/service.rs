//! Main authentication service implementation

use std::sync::Arc;

use gl_shared::utils::validation::{is_valid_email, normalize_email};

use crate::domain::entities::user::User;
use crate::domain::value_objects::AuthSession;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::{
    EmailVerificationRepository, PasswordResetRepository, SessionRepository, UserRepository,
};
use crate::services::session::SessionService;
use crate::services::verification::{IssueCodeResult, MailServiceTrait, VerificationService};

use super::config::AuthServiceConfig;
use super::email_utils::mask_email;
use super::password::{hash_password, verify_password};

/// Authentication service for managing the complete auth flows
pub struct AuthService<U, V, R, S, M>
where
    U: UserRepository,
    V: EmailVerificationRepository,
    R: PasswordResetRepository,
    S: SessionRepository,
    M: MailServiceTrait,
{
    /// User repository for account persistence
    user_repository: Arc<U>,
    /// Verification service for one-time code handling
    verification_service: Arc<VerificationService<V, R, M>>,
    /// Session service for cookie-backed login sessions
    session_service: Arc<SessionService<S>>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, V, R, S, M> AuthService<U, V, R, S, M>
where
    U: UserRepository,
    V: EmailVerificationRepository,
    R: PasswordResetRepository,
    S: SessionRepository,
    M: MailServiceTrait,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        verification_service: Arc<VerificationService<V, R, M>>,
        session_service: Arc<SessionService<S>>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            verification_service,
            session_service,
            config,
        }
    }

    /// Start a registration: validate inputs and dispatch a verification code
    ///
    /// The candidate password is hashed now and stored in the pending
    /// record; the plaintext never outlives this call.
    pub async fn request_verification(
        &self,
        email: &str,
        password: &str,
    ) -> DomainResult<IssueCodeResult> {
        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(AuthError::InvalidEmail.into());
        }
        if password.len() < self.config.min_password_length {
            return Err(AuthError::PasswordTooShort {
                min: self.config.min_password_length,
            }
            .into());
        }

        if self.user_repository.exists_by_email(&email).await? {
            tracing::warn!(
                email = %mask_email(&email),
                event = "register_duplicate_email",
                "Registration requested for an existing account"
            );
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        let password_hash = hash_password(password)?;
        self.verification_service
            .issue_registration_code(&email, password_hash)
            .await
    }

    /// Complete a registration: consume the code, create the account, log in
    pub async fn confirm_verification(
        &self,
        email: &str,
        code: &str,
    ) -> DomainResult<AuthSession> {
        let email = normalize_email(email);

        let pending = self
            .verification_service
            .check_registration_code(&email, code)
            .await?;

        // The unique email constraint makes a concurrent double-confirm
        // create at most one account
        let user = self
            .user_repository
            .create(User::new(email.clone(), pending.password_hash))
            .await?;

        self.verification_service.consume_registration(&email).await?;

        tracing::info!(
            email = %mask_email(&email),
            user_id = %user.id,
            event = "account_created",
            "Email verified and account created"
        );

        self.session_service.issue(user.id).await
    }

    /// Authenticate with email and password
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthSession> {
        let email = normalize_email(email);

        let user = self
            .user_repository
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash)? {
            tracing::warn!(
                email = %mask_email(&email),
                event = "login_failed",
                "Login with wrong password"
            );
            return Err(AuthError::InvalidCredentials.into());
        }

        self.user_repository.update_last_login(user.id).await?;

        tracing::info!(
            email = %mask_email(&email),
            user_id = %user.id,
            event = "login_succeeded",
            "User logged in"
        );

        self.session_service.issue(user.id).await
    }

    /// End the session behind a cookie token
    pub async fn logout(&self, token: &str) -> DomainResult<()> {
        self.session_service.revoke(token).await
    }

    /// Start a password reset: dispatch a reset code to an existing account
    ///
    /// Unknown accounts are reported as such; see DESIGN.md for the
    /// enumeration policy decision.
    pub async fn request_reset(&self, email: &str) -> DomainResult<IssueCodeResult> {
        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(AuthError::InvalidEmail.into());
        }

        if !self.user_repository.exists_by_email(&email).await? {
            tracing::warn!(
                email = %mask_email(&email),
                event = "reset_unknown_account",
                "Password reset requested for unknown account"
            );
            return Err(AuthError::UserNotFound.into());
        }

        self.verification_service.issue_reset_code(&email).await
    }

    /// Complete a password reset: consume the code, set the new password, log in
    ///
    /// The new password arrives here, not at request time, and is hashed
    /// fresh before the credential is overwritten.
    pub async fn confirm_reset(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> DomainResult<AuthSession> {
        let email = normalize_email(email);
        if new_password.len() < self.config.min_password_length {
            return Err(AuthError::PasswordTooShort {
                min: self.config.min_password_length,
            }
            .into());
        }

        self.verification_service
            .check_reset_code(&email, code)
            .await?;

        let password_hash = hash_password(new_password)?;
        let user = self
            .user_repository
            .update_password(&email, &password_hash)
            .await?;

        self.verification_service.consume_reset(&email).await?;

        tracing::info!(
            email = %mask_email(&email),
            user_id = %user.id,
            event = "password_reset",
            "Password reset completed"
        );

        self.session_service.issue(user.id).await
    }
}
