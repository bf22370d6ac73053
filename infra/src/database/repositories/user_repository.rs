//! MySQL implementation of the user repository

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, Pool, Row};
use tracing::{debug, error};
use uuid::Uuid;

use gl_core::domain::entities::user::User;
use gl_core::errors::{AuthError, DomainError};
use gl_core::repositories::UserRepository;
use gl_core::services::auth::mask_email;

/// MySQL-backed user store
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: Pool<MySql>,
}

impl MySqlUserRepository {
    /// Create a new user repository
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &MySqlRow) -> Result<User, DomainError> {
        let id: String = row.try_get("id").map_err(internal)?;
        Ok(User {
            id: Uuid::parse_str(&id).map_err(internal)?,
            email: row.try_get("email").map_err(internal)?,
            password_hash: row.try_get("password_hash").map_err(internal)?,
            created_at: row.try_get("created_at").map_err(internal)?,
            updated_at: row.try_get("updated_at").map_err(internal)?,
            last_login_at: row.try_get("last_login_at").map_err(internal)?,
        })
    }
}

fn internal(e: impl std::fmt::Display) -> DomainError {
    DomainError::Internal {
        message: format!("User repository error: {}", e),
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, email, password_hash, created_at, updated_at, last_login_at
            FROM users
            WHERE email = ?
        "#;

        let row = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(email = %mask_email(email), error = %e, "Failed to fetch user by email");
                internal(e)
            })?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, email, password_hash, created_at, updated_at, last_login_at
            FROM users
            WHERE id = ?
        "#;

        let row = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(user_id = %id, error = %e, "Failed to fetch user by id");
                internal(e)
            })?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (id, email, password_hash, created_at, updated_at, last_login_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.created_at)
            .bind(user.updated_at)
            .bind(user.last_login_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db)
                    if db.kind() == sqlx::error::ErrorKind::UniqueViolation =>
                {
                    DomainError::Auth(AuthError::EmailAlreadyRegistered)
                }
                _ => {
                    error!(email = %mask_email(&user.email), error = %e, "Failed to create user");
                    internal(e)
                }
            })?;

        debug!(email = %mask_email(&user.email), user_id = %user.id, "Created user");

        Ok(user)
    }

    async fn update_password(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users
            SET password_hash = ?, updated_at = NOW(6)
            WHERE email = ?
        "#;

        let result = sqlx::query(query)
            .bind(password_hash)
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(email = %mask_email(email), error = %e, "Failed to update password");
                internal(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::Auth(AuthError::UserNotFound));
        }

        self.find_by_email(email)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))
    }

    async fn update_last_login(&self, id: Uuid) -> Result<(), DomainError> {
        let query = r#"
            UPDATE users
            SET last_login_at = NOW(6), updated_at = NOW(6)
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(user_id = %id, error = %e, "Failed to update last login");
                internal(e)
            })?;

        Ok(())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let query = "SELECT 1 FROM users WHERE email = ? LIMIT 1";

        let exists = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(internal)?
            .is_some();

        Ok(exists)
    }
}
