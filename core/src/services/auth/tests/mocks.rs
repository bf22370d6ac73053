//! Mock mail service for auth flow tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::services::verification::MailServiceTrait;

/// Mock mail service capturing dispatched codes
pub struct MockMailService {
    pub sent_codes: Arc<Mutex<HashMap<String, String>>>,
}

impl MockMailService {
    pub fn new() -> Self {
        Self {
            sent_codes: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn sent_code(&self, email: &str) -> Option<String> {
        self.sent_codes.lock().unwrap().get(email).cloned()
    }
}

#[async_trait]
impl MailServiceTrait for MockMailService {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        self.sent_codes
            .lock()
            .unwrap()
            .insert(email.to_string(), code.to_string());
        Ok("mock-msg".to_string())
    }

    async fn send_password_reset_code(
        &self,
        email: &str,
        code: &str,
    ) -> Result<String, String> {
        self.sent_codes
            .lock()
            .unwrap()
            .insert(email.to_string(), code.to_string());
        Ok("mock-msg".to_string())
    }
}
