//! In-memory implementation of PasswordResetRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::password_reset::PasswordReset;
use crate::errors::{AuthError, DomainError};

use super::trait_::PasswordResetRepository;

/// Mock pending-reset store for testing
#[derive(Default)]
pub struct MockPasswordResetRepository {
    records: Arc<RwLock<HashMap<String, PasswordReset>>>,
}

impl MockPasswordResetRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a stored record wholesale (test setup: backdating timestamps)
    pub async fn put(&self, record: PasswordReset) {
        self.records
            .write()
            .await
            .insert(record.email.clone(), record);
    }
}

#[async_trait]
impl PasswordResetRepository for MockPasswordResetRepository {
    async fn upsert(&self, record: PasswordReset) -> Result<(), DomainError> {
        self.records
            .write()
            .await
            .insert(record.email.clone(), record);
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<PasswordReset>, DomainError> {
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
