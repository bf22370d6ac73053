//! Exercise catalog store.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::exercise::Exercise;
use crate::errors::DomainError;

/// Store for catalog entries
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// All exercises visible to the user (public + own private), name ascending
    async fn find_visible(&self, user_id: Uuid) -> Result<Vec<Exercise>, DomainError>;

    /// One exercise, only if visible to the user
    async fn find_visible_by_id(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Exercise>, DomainError>;

    /// Persist a new catalog entry
    async fn create(&self, exercise: Exercise) -> Result<Exercise, DomainError>;
}
