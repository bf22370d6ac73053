//! In-memory implementation of EmailVerificationRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::email_verification::EmailVerification;
use crate::errors::{AuthError, DomainError};

use super::trait_::EmailVerificationRepository;

/// Mock pending-verification store for testing
#[derive(Default)]
pub struct MockEmailVerificationRepository {
    records: Arc<RwLock<HashMap<String, EmailVerification>>>,
}

impl MockEmailVerificationRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a stored record wholesale (test setup: backdating timestamps)
    pub async fn put(&self, record: EmailVerification) {
        self.records
            .write()
            .await
            .insert(record.email.clone(), record);
    }
}

#[async_trait]
impl EmailVerificationRepository for MockEmailVerificationRepository {
    async fn upsert(&self, record: EmailVerification) -> Result<(), DomainError> {
        self.records
            .write()
            .await
            .insert(record.email.clone(), record);
        Ok(())
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<EmailVerification>, DomainError> {
        Ok(self.records.read().await.get(email).cloned())
    }

    async fn increment_attempts(&self, email: &str) -> Result<i32, DomainError> {
        let mut records = self.records.write().await;
        let record = records
            .get_mut(email)
            .ok_or(DomainError::Auth(AuthError::VerificationNotPending))?;
        record.attempts += 1;
        Ok(record.attempts)
    }

    async fn delete(&self, email: &str) -> Result<(), DomainError> {
        self.records.write().await.remove(email);
        Ok(())
    }
}
