//! Session store backing the session cookie.

use async_trait::async_trait;

use crate::domain::entities::session::Session;
use crate::errors::DomainError;

/// Store for server-side sessions, looked up by token digest
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Persist a new session
    async fn create(&self, session: Session) -> Result<(), DomainError>;

    /// Find a session by the digest of its cookie token
    async fn find_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<Session>, DomainError>;

    /// Delete the session with the given token digest; Ok even if absent
    async fn delete_by_token_hash(&self, token_hash: &str) -> Result<(), DomainError>;
}
