//! MySQL implementation of the pending password-reset store

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, Pool, Row};
use tracing::{debug, error};

use gl_core::domain::entities::password_reset::PasswordReset;
use gl_core::errors::DomainError;
use gl_core::repositories::PasswordResetRepository;
use gl_core::services::auth::mask_email;

/// MySQL-backed pending reset store
pub struct MySqlPasswordResetRepository {
    /// Database connection pool
    pool: Pool<MySql>,
}

impl MySqlPasswordResetRepository {
    /// Create a new pending-reset repository
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }

    fn row_to_record(row: &MySqlRow) -> Result<PasswordReset, DomainError> {
        Ok(PasswordReset {
            email: row.try_get("email").map_err(internal)?,
            code_hash: row.try_get("code_hash").map_err(internal)?,
            expires_at: row.try_get("expires_at").map_err(internal)?,
            attempts: row.try_get("attempts").map_err(internal)?,
            last_sent_at: row.try_get("last_sent_at").map_err(internal)?,
        })
    }
}

fn internal(e: impl std::fmt::Display) -> DomainError {
    DomainError::Internal {
        message: format!("Password reset repository error: {}", e),
    }
}

#[async_trait]
impl PasswordResetRepository for MySqlPasswordResetRepository {
    async fn upsert(&self, record: PasswordReset) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO password_resets (
                email, code_hash, expires_at, attempts, last_sent_at
            ) VALUES (?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                code_hash = VALUES(code_hash),
                expires_at = VALUES(expires_at),
                attempts = VALUES(attempts),
                last_sent_at = VALUES(last_sent_at)
        "#;

        sqlx::query(query)
            .bind(&record.email)
            .bind(&record.code_hash)
            .bind(record.expires_at)
            .bind(record.attempts)
            .bind(record.last_sent_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(
                    email = %mask_email(&record.email),
                    error = %e,
                    "Failed to upsert pending reset"
                );
                internal(e)
            })?;

        debug!(email = %mask_email(&record.email), "Upserted pending reset");

        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<PasswordReset>, DomainError> {
        let query = r#"
            SELECT email, code_hash, expires_at, attempts, last_sent_at
            FROM password_resets
            WHERE email = ?
        "#;

        let row = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(
                    email = %mask_email(email),
                    error = %e,
                    "Failed to fetch pending reset"
                );
                internal(e)
            })?;

        row.as_ref().map(Self::row_to_record).transpose()
    }

    async fn increment_attempts(&self, email: &str) -> Result<i32, DomainError> {
        let query = r#"
            UPDATE password_resets
            SET attempts = attempts + 1
            WHERE email = ?
        "#;

        sqlx::query(query)
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(
                    email = %mask_email(email),
                    error = %e,
                    "Failed to increment reset attempts"
                );
                internal(e)
            })?;

        let count = sqlx::query("SELECT attempts FROM password_resets WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(internal)?
            .and_then(|row| row.try_get::<i32, _>("attempts").ok())
            .unwrap_or(1);

        debug!(
            email = %mask_email(email),
            attempts = count,
            "Incremented reset attempts"
        );

        Ok(count)
    }

    async fn delete(&self, email: &str) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM password_resets WHERE email = ?")
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(
                    email = %mask_email(email),
                    error = %e,
                    "Failed to delete pending reset"
                );
                internal(e)
            })?;

        debug!(email = %mask_email(email), "Deleted pending reset");

        Ok(())
    }
}
