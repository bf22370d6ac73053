//! MySQL implementation of the session store

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, Pool, Row};
use tracing::{debug, error};
use uuid::Uuid;

use gl_core::domain::entities::session::Session;
use gl_core::errors::DomainError;
use gl_core::repositories::SessionRepository;

/// MySQL-backed session store
pub struct MySqlSessionRepository {
    /// Database connection pool
    pool: Pool<MySql>,
}

impl MySqlSessionRepository {
    /// Create a new session repository
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }

    fn row_to_session(row: &MySqlRow) -> Result<Session, DomainError> {
        let id: String = row.try_get("id").map_err(internal)?;
        let user_id: String = row.try_get("user_id").map_err(internal)?;
        Ok(Session {
            id: Uuid::parse_str(&id).map_err(internal)?,
            user_id: Uuid::parse_str(&user_id).map_err(internal)?,
            token_hash: row.try_get("token_hash").map_err(internal)?,
            created_at: row.try_get("created_at").map_err(internal)?,
            expires_at: row.try_get("expires_at").map_err(internal)?,
        })
    }
}

fn internal(e: impl std::fmt::Display) -> DomainError {
    DomainError::Internal {
        message: format!("Session repository error: {}", e),
    }
}

#[async_trait]
impl SessionRepository for MySqlSessionRepository {
    async fn create(&self, session: Session) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO sessions (id, user_id, token_hash, created_at, expires_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(session.id.to_string())
            .bind(session.user_id.to_string())
            .bind(&session.token_hash)
            .bind(session.created_at)
            .bind(session.expires_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(user_id = %session.user_id, error = %e, "Failed to create session");
                internal(e)
            })?;

        debug!(user_id = %session.user_id, "Created session");

        Ok(())
    }

    async fn find_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<Session>, DomainError> {
        let query = r#"
            SELECT id, user_id, token_hash, created_at, expires_at
            FROM sessions
            WHERE token_hash = ?
        "#;

        let row = sqlx::query(query)
            .bind(token_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to fetch session");
                internal(e)
            })?;

        row.as_ref().map(Self::row_to_session).transpose()
    }

    async fn delete_by_token_hash(&self, token_hash: &str) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM sessions WHERE token_hash = ?")
            .bind(token_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete session");
                internal(e)
            })?;

        Ok(())
    }
}
