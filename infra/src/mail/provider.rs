//! Transactional mail provider client
//!
//! Sends mail through an HTTP JSON API (Brevo-compatible request shape).
//! Delivery failures surface as errors so code issuance is never reported
//! successful without the mail leaving.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info};

use gl_core::domain::entities::one_time_code::CODE_TTL_MINUTES;
use gl_core::services::verification::MailServiceTrait;
use gl_shared::config::MailConfig;

use super::mask_email;
use crate::InfrastructureError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EmailAddress {
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendEmailBody {
    sender: EmailAddress,
    to: Vec<EmailAddress>,
    subject: String,
    text_content: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendEmailResponse {
    message_id: Option<String>,
}

/// Mail service backed by the provider's HTTP API
pub struct HttpMailService {
    client: reqwest::Client,
    config: MailConfig,
}

impl HttpMailService {
    /// Create a new provider client
    pub fn new(config: MailConfig) -> Result<Self, InfrastructureError> {
        if config.api_key.trim().is_empty() {
            return Err(InfrastructureError::Config(
                "MAIL_API_KEY not set".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| {
                InfrastructureError::Mail(format!("Failed to build HTTP client: {}", e))
            })?;

        info!(
            from = %config.from_address,
            "Mail provider client initialized"
        );

        Ok(Self { client, config })
    }

    async fn send(
        &self,
        to: &str,
        subject: &str,
        text: String,
    ) -> Result<String, InfrastructureError> {
        let body = SendEmailBody {
            sender: EmailAddress {
                email: self.config.from_address.clone(),
                name: Some(self.config.from_name.clone()),
            },
            to: vec![EmailAddress {
                email: to.to_string(),
                name: None,
            }],
            subject: subject.to_string(),
            text_content: text,
        };

        debug!(to = %mask_email(to), subject = subject, "Sending mail");

        let response = self
            .client
            .post(&self.config.api_url)
            .header("api-key", &self.config.api_key)
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(to = %mask_email(to), error = %e, "Mail request failed");
                InfrastructureError::Mail(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                to = %mask_email(to),
                status = %status,
                "Mail provider rejected the send"
            );
            return Err(InfrastructureError::Mail(format!(
                "Provider returned {}: {}",
                status, body
            )));
        }

        let parsed: SendEmailResponse = response.json().await.unwrap_or(SendEmailResponse {
            message_id: None,
        });
        Ok(parsed
            .message_id
            .unwrap_or_else(|| format!("sent-{}", uuid::Uuid::new_v4())))
    }
}

#[async_trait]
impl MailServiceTrait for HttpMailService {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        self.send(
            email,
            "GymLog verification code",
            format!(
                "Your verification code: {}\n\nThe code is valid for {} minutes.",
                code, CODE_TTL_MINUTES
            ),
        )
        .await
        .map_err(|e| e.to_string())
    }

    async fn send_password_reset_code(
        &self,
        email: &str,
        code: &str,
    ) -> Result<String, String> {
        self.send(
            email,
            "GymLog password reset code",
            format!(
                "Your password reset code: {}\n\nThe code is valid for {} minutes.",
                code, CODE_TTL_MINUTES
            ),
        )
        .await
        .map_err(|e| e.to_string())
    }
}
