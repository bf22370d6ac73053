//! In-memory implementation of WorkoutSetRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::workout_set::WorkoutSet;
use crate::errors::DomainError;

use super::trait_::WorkoutSetRepository;

/// Mock workout log store for testing
#[derive(Default)]
pub struct MockWorkoutSetRepository {
    sets: Arc<RwLock<Vec<WorkoutSet>>>,
}

impl MockWorkoutSetRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a set directly (test setup)
    pub async fn put(&self, set: WorkoutSet) {
        self.sets.write().await.push(set);
    }
}

#[async_trait]
impl WorkoutSetRepository for MockWorkoutSetRepository {
    async fn create(&self, set: WorkoutSet) -> Result<WorkoutSet, DomainError> {
        self.sets.write().await.push(set.clone());
        Ok(set)
    }

    async fn list_for_exercise(
        &self,
        user_id: Uuid,
        exercise_id: Uuid,
        limit: u32,
    ) -> Result<Vec<WorkoutSet>, DomainError> {
        let sets = self.sets.read().await;
        let mut matching: Vec<WorkoutSet> = sets
            .iter()
            .filter(|s| s.user_id == user_id && s.exercise_id == exercise_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.logged_at.cmp(&a.logged_at));
        matching.truncate(limit as usize);
        Ok(matching)
    }

    async fn latest_exercise_ids(
        &self,
        user_id: Uuid,
        limit: u32,
    ) -> Result<Vec<Uuid>, DomainError> {
        let sets = self.sets.read().await;
        let mut own: Vec<&WorkoutSet> = sets.iter().filter(|s| s.user_id == user_id).collect();
        own.sort_by(|a, b| b.logged_at.cmp(&a.logged_at));
        Ok(own
            .into_iter()
            .take(limit as usize)
            .map(|s| s.exercise_id)
            .collect())
    }
}
