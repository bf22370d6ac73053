//! Opaque-token session management
//!
//! Tokens are 32 random bytes, hex encoded. The store only ever sees the
//! SHA-256 digest; validating a cookie re-digests the presented token and
//! looks the digest up.

use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::session::Session;
use crate::domain::value_objects::AuthSession;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::SessionRepository;

/// Session service issuing and validating cookie tokens
pub struct SessionService<S: SessionRepository> {
    /// Session store
    repository: Arc<S>,
    /// Session lifetime in days
    ttl_days: i64,
}

impl<S: SessionRepository> SessionService<S> {
    /// Create a new session service
    pub fn new(repository: Arc<S>, ttl_days: i64) -> Self {
        Self {
            repository,
            ttl_days,
        }
    }

    /// Issue a new session for a user, returning the cookie token
    pub async fn issue(&self, user_id: Uuid) -> DomainResult<AuthSession> {
        let token = Self::generate_token();
        let session = Session::new(user_id, Self::digest(&token), self.ttl_days);
        self.repository.create(session).await?;

        tracing::debug!(user_id = %user_id, event = "session_issued", "Issued session");

        Ok(AuthSession { user_id, token })
    }

    /// Resolve a cookie token to its user
    ///
    /// Expired sessions are removed on sight.
    pub async fn validate(&self, token: &str) -> DomainResult<Uuid> {
        let token_hash = Self::digest(token);
        let session = self
            .repository
            .find_by_token_hash(&token_hash)
            .await?
            .ok_or(DomainError::Unauthorized)?;

        if session.is_expired() {
            self.repository.delete_by_token_hash(&token_hash).await?;
            return Err(AuthError::SessionExpired.into());
        }

        Ok(session.user_id)
    }

    /// Delete the session behind a token; Ok even if none exists
    pub async fn revoke(&self, token: &str) -> DomainResult<()> {
        self.repository
            .delete_by_token_hash(&Self::digest(token))
            .await
    }

    /// Generate an opaque session token with the OS CSPRNG
    fn generate_token() -> String {
        let mut bytes = [0u8; 32];
        OsRng.fill_bytes(&mut bytes);
        hex::encode(bytes)
    }

    /// Hex SHA-256 digest of a token
    fn digest(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockSessionRepository;

    #[tokio::test]
    async fn test_issue_and_validate() {
        let repository = Arc::new(MockSessionRepository::new());
        let service = SessionService::new(repository.clone(), 30);

        let user_id = Uuid::new_v4();
        let auth = service.issue(user_id).await.unwrap();
        assert_eq!(auth.user_id, user_id);

        let resolved = service.validate(&auth.token).await.unwrap();
        assert_eq!(resolved, user_id);
    }

    #[tokio::test]
    async fn test_unknown_token_rejected() {
        let repository = Arc::new(MockSessionRepository::new());
        let service = SessionService::new(repository, 30);

        let result = service.validate("deadbeef").await;
        assert!(matches!(result, Err(DomainError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_revoked_token_rejected() {
        let repository = Arc::new(MockSessionRepository::new());
        let service = SessionService::new(repository.clone(), 30);

        let auth = service.issue(Uuid::new_v4()).await.unwrap();
        service.revoke(&auth.token).await.unwrap();

        assert!(service.validate(&auth.token).await.is_err());
        assert_eq!(repository.count().await, 0);
    }

    #[tokio::test]
    async fn test_token_not_stored_in_plaintext() {
        let repository = Arc::new(MockSessionRepository::new());
        let service = SessionService::new(repository.clone(), 30);

        let auth = service.issue(Uuid::new_v4()).await.unwrap();
        // Looking the raw token up as a digest must find nothing
        assert!(repository
            .find_by_token_hash(&auth.token)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_expired_session_removed_on_validate() {
        use chrono::{Duration, Utc};
        use crate::domain::entities::session::Session;

        let repository = Arc::new(MockSessionRepository::new());
        let service = SessionService::new(repository.clone(), 30);

        let user_id = Uuid::new_v4();
        let token = "expired-token";
        let mut session = Session::new(
            user_id,
            SessionService::<MockSessionRepository>::digest(token),
            30,
        );
        session.expires_at = Utc::now() - Duration::seconds(1);
        repository.create(session).await.unwrap();

        let result = service.validate(token).await;
        assert!(result.is_err());
        assert_eq!(repository.count().await, 0);
    }
}
