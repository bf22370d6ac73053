//! Mail provider configuration module

use serde::{Deserialize, Serialize};

/// Configuration for the transactional mail provider HTTP API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Provider API key
    pub api_key: String,

    /// Sender address shown to recipients
    pub from_address: String,

    /// Sender display name
    pub from_name: String,

    /// Provider endpoint URL
    pub api_url: String,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,

    /// Use the console mock instead of the real provider
    pub use_mock: bool,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            from_address: String::from("no-reply@gymlog.local"),
            from_name: String::from("GymLog"),
            api_url: String::from("https://api.brevo.com/v3/smtp/email"),
            request_timeout_secs: 30,
            use_mock: true,
        }
    }
}

impl MailConfig {
    /// Create from environment variables
    ///
    /// Without `MAIL_API_KEY` the config falls back to the console mock so
    /// development setups work without a provider account.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let api_key = std::env::var("MAIL_API_KEY").unwrap_or_default();
        let use_mock = api_key.trim().is_empty();
        Self {
            from_address: std::env::var("MAIL_FROM").unwrap_or(defaults.from_address),
            from_name: std::env::var("MAIL_FROM_NAME").unwrap_or(defaults.from_name),
            api_url: std::env::var("MAIL_API_URL").unwrap_or(defaults.api_url),
            request_timeout_secs: std::env::var("MAIL_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
            api_key,
            use_mock,
        }
    }

    /// Whether a provider key is present (used by the health endpoint)
    pub fn is_configured(&self) -> bool {
        !self.use_mock
    }
}
