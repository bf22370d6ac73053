//! Mock mail service implementation
//!
//! Logs codes to the console instead of delivering them, and keeps the last
//! code per address so development flows and integration tests can read it
//! back.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::info;
use uuid::Uuid;

use gl_core::services::verification::MailServiceTrait;

use super::mask_email;

/// Mock mail service for development and testing
#[derive(Clone, Default)]
pub struct MockMailService {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Last code per recipient
    sent_codes: Arc<Mutex<HashMap<String, String>>>,
}

impl MockMailService {
    /// Create a new mock mail service
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// The last code dispatched to an address, if any
    pub fn sent_code(&self, email: &str) -> Option<String> {
        self.sent_codes.lock().unwrap().get(email).cloned()
    }

    fn log_send(&self, kind: &str, email: &str, code: &str) -> String {
        self.message_count.fetch_add(1, Ordering::SeqCst);
        self.sent_codes
            .lock()
            .unwrap()
            .insert(email.to_string(), code.to_string());
        // The plaintext code is intentionally printed; this service only
        // runs in development
        info!(
            to = %mask_email(email),
            code = code,
            kind = kind,
            "MOCK MAIL (not delivered)"
        );
        format!("mock-{}", Uuid::new_v4())
    }
}

#[async_trait]
impl MailServiceTrait for MockMailService {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        Ok(self.log_send("verification", email, code))
    }

    async fn send_password_reset_code(
        &self,
        email: &str,
        code: &str,
    ) -> Result<String, String> {
        Ok(self.log_send("password_reset", email, code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_sends() {
        let service = MockMailService::new();
        service
            .send_verification_code("user@example.com", "A7K2P9")
            .await
            .unwrap();
        service
            .send_password_reset_code("user@example.com", "B8M3Q2")
            .await
            .unwrap();
        assert_eq!(service.message_count(), 2);
        assert_eq!(service.sent_code("user@example.com").as_deref(), Some("B8M3Q2"));
    }
}
