//! Server-side session record backing the session cookie.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A login session
///
/// The cookie holds an opaque random token; only its hex SHA-256 digest is
/// stored here, so a leaked sessions table cannot be replayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier for the session
    pub id: Uuid,

    /// Owning user
    pub user_id: Uuid,

    /// Hex SHA-256 digest of the opaque session token
    pub token_hash: String,

    /// Timestamp when the session was created
    pub created_at: DateTime<Utc>,

    /// Instant after which the session is no longer honored
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Creates a new session for a user with the given token digest and TTL
    pub fn new(user_id: Uuid, token_hash: String, ttl_days: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            token_hash,
            created_at: now,
            expires_at: now + Duration::days(ttl_days),
        }
    }

    /// Whether the session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}
