//! Trait for mail service integration

use async_trait::async_trait;

/// Trait for the out-of-band code delivery channel
///
/// Returns the provider message id on success; any failure must surface as
/// an error so issuance is never reported as successful without delivery.
#[async_trait]
pub trait MailServiceTrait: Send + Sync {
    /// Deliver a registration verification code
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String>;
    /// Deliver a password reset code
    async fn send_password_reset_code(&self, email: &str, code: &str)
        -> Result<String, String>;
}
