//! Mock mail service for verification tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::services::verification::traits::MailServiceTrait;

/// Mock mail service capturing dispatched codes
pub struct MockMailService {
    pub sent_codes: Arc<Mutex<HashMap<String, String>>>,
    pub sent_count: Arc<Mutex<u32>>,
    pub should_fail: bool,
}

impl MockMailService {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sent_codes: Arc::new(Mutex::new(HashMap::new())),
            sent_count: Arc::new(Mutex::new(0)),
            should_fail,
        }
    }

    pub fn sent_code(&self, email: &str) -> Option<String> {
        self.sent_codes.lock().unwrap().get(email).cloned()
    }

    pub fn send_count(&self) -> u32 {
        *self.sent_count.lock().unwrap()
    }

    fn record(&self, email: &str, code: &str) -> Result<String, String> {
        if self.should_fail {
            return Err("mail provider error".to_string());
        }
        self.sent_codes
            .lock()
            .unwrap()
            .insert(email.to_string(), code.to_string());
        *self.sent_count.lock().unwrap() += 1;
        Ok(format!("mock-msg-{}", uuid::Uuid::new_v4()))
    }
}

#[async_trait]
impl MailServiceTrait for MockMailService {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        self.record(email, code)
    }

    async fn send_password_reset_code(
        &self,
        email: &str,
        code: &str,
    ) -> Result<String, String> {
        self.record(email, code)
    }
}
