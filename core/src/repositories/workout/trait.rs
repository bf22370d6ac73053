//! Workout log store.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::workout_set::WorkoutSet;
use crate::errors::DomainError;

/// Store for logged sets
#[async_trait]
pub trait WorkoutSetRepository: Send + Sync {
    /// Persist a new set
    async fn create(&self, set: WorkoutSet) -> Result<WorkoutSet, DomainError>;

    /// The user's sets for one exercise, newest first, capped at `limit`
    async fn list_for_exercise(
        &self,
        user_id: Uuid,
        exercise_id: Uuid,
        limit: u32,
    ) -> Result<Vec<WorkoutSet>, DomainError>;

    /// Exercise ids of the user's latest sets, newest first, one per set
    ///
    /// May contain duplicates; callers dedup while preserving order.
    async fn latest_exercise_ids(
        &self,
        user_id: Uuid,
        limit: u32,
    ) -> Result<Vec<Uuid>, DomainError>;
}
