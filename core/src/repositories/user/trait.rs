//! User repository trait defining the interface for account persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// The store must enforce a uniqueness constraint on `email`; `create` for
/// an email that already exists fails, which backstops concurrent
/// verification confirms (at most one account per email).
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by normalized email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Create a new user
    ///
    /// Fails with a validation error if the email is already taken.
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Overwrite the password hash of an existing user, returning the user
    async fn update_password(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<User, DomainError>;

    /// Record a login for the user
    async fn update_last_login(&self, id: Uuid) -> Result<(), DomainError>;

    /// Check whether an account exists for the email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;
}
