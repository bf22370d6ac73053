//! In-memory implementation of ExerciseRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::exercise::Exercise;
use crate::errors::DomainError;

use super::trait_::ExerciseRepository;

/// Mock catalog store for testing
#[derive(Default)]
pub struct MockExerciseRepository {
    exercises: Arc<RwLock<HashMap<Uuid, Exercise>>>,
}

impl MockExerciseRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an exercise directly (test setup)
    pub async fn put(&self, exercise: Exercise) {
        self.exercises
            .write()
            .await
            .insert(exercise.id, exercise);
    }
}

#[async_trait]
impl ExerciseRepository for MockExerciseRepository {
    async fn find_visible(&self, user_id: Uuid) -> Result<Vec<Exercise>, DomainError> {
        let exercises = self.exercises.read().await;
        let mut visible: Vec<Exercise> = exercises
            .values()
            .filter(|e| e.visible_to(user_id))
            .cloned()
            .collect();
        visible.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(visible)
    }

    async fn find_visible_by_id(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Exercise>, DomainError> {
        let exercises = self.exercises.read().await;
        Ok(exercises
            .get(&id)
            .filter(|e| e.visible_to(user_id))
            .cloned())
    }

    async fn create(&self, exercise: Exercise) -> Result<Exercise, DomainError> {
        self.exercises
            .write()
            .await
            .insert(exercise.id, exercise.clone());
        Ok(exercise)
    }
}
