//! Mail delivery implementations.

pub mod mock;
pub mod provider;

pub use mock::MockMailService;
pub use provider::HttpMailService;

pub(crate) use gl_core::services::auth::mask_email;

use async_trait::async_trait;

use gl_core::services::verification::MailServiceTrait;
use gl_shared::config::MailConfig;

use crate::InfrastructureError;

/// Runtime-selected mail backend
///
/// Development setups without a provider key run on the console mock; a
/// configured key selects the real provider client.
pub enum MailBackend {
    Provider(HttpMailService),
    Mock(MockMailService),
}

impl MailBackend {
    /// Select the backend from configuration
    pub fn from_config(config: &MailConfig) -> Result<Self, InfrastructureError> {
        if config.use_mock {
            tracing::warn!("MAIL_API_KEY not set; using the console mock mailer");
            Ok(MailBackend::Mock(MockMailService::new()))
        } else {
            Ok(MailBackend::Provider(HttpMailService::new(config.clone())?))
        }
    }
}

#[async_trait]
impl MailServiceTrait for MailBackend {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        match self {
            MailBackend::Provider(service) => service.send_verification_code(email, code).await,
            MailBackend::Mock(service) => service.send_verification_code(email, code).await,
        }
    }

    async fn send_password_reset_code(
        &self,
        email: &str,
        code: &str,
    ) -> Result<String, String> {
        match self {
            MailBackend::Provider(service) => {
                service.send_password_reset_code(email, code).await
            }
            MailBackend::Mock(service) => service.send_password_reset_code(email, code).await,
        }
    }
}
