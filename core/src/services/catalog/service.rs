//! Catalog listing and private exercise creation

use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::exercise::{Equipment, Exercise, Muscle};
use crate::errors::{DomainResult, ValidationError};
use crate::repositories::{ExerciseRepository, WorkoutSetRepository};

/// Distinct exercises shown in the "recent" shelf
const RECENT_EXERCISE_LIMIT: usize = 10;

/// How many latest log rows to scan when collecting recent exercises
const RECENT_SCAN_LIMIT: u32 = 200;

/// Catalog listing split for the picker UI
#[derive(Debug, Clone)]
pub struct ExerciseCatalog {
    /// Recently logged exercises, most recent first
    pub recent: Vec<Exercise>,
    /// Everything else visible, name ascending
    pub others: Vec<Exercise>,
}

/// Exercise catalog service
pub struct CatalogService<E, W>
where
    E: ExerciseRepository,
    W: WorkoutSetRepository,
{
    /// Catalog store
    exercise_repository: Arc<E>,
    /// Workout log store, for the recent shelf
    workout_repository: Arc<W>,
}

impl<E, W> CatalogService<E, W>
where
    E: ExerciseRepository,
    W: WorkoutSetRepository,
{
    /// Create a new catalog service
    pub fn new(exercise_repository: Arc<E>, workout_repository: Arc<W>) -> Self {
        Self {
            exercise_repository,
            workout_repository,
        }
    }

    /// Everything the user may see, split into recent and others
    pub async fn list_for_user(&self, user_id: Uuid) -> DomainResult<ExerciseCatalog> {
        let visible = self.exercise_repository.find_visible(user_id).await?;

        let latest_ids = self
            .workout_repository
            .latest_exercise_ids(user_id, RECENT_SCAN_LIMIT)
            .await?;

        // Dedup while preserving recency order
        let mut seen: HashSet<Uuid> = HashSet::new();
        let mut recent_ids: Vec<Uuid> = Vec::new();
        for id in latest_ids {
            if seen.insert(id) {
                recent_ids.push(id);
            }
            if recent_ids.len() >= RECENT_EXERCISE_LIMIT {
                break;
            }
        }

        let recent: Vec<Exercise> = recent_ids
            .iter()
            .filter_map(|id| visible.iter().find(|e| e.id == *id).cloned())
            .collect();
        let others: Vec<Exercise> = visible
            .into_iter()
            .filter(|e| !seen.contains(&e.id))
            .collect();

        Ok(ExerciseCatalog { recent, others })
    }

    /// Create a private exercise owned by the user
    pub async fn create_private(
        &self,
        user_id: Uuid,
        name: &str,
        equipment: Equipment,
        muscle: Muscle,
        notes: Option<String>,
        image_url: Option<String>,
    ) -> DomainResult<Exercise> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "name".to_string(),
            }
            .into());
        }

        // Empty strings are absent values, not data
        let notes = notes.filter(|s| !s.trim().is_empty());
        let image_url = image_url.filter(|s| !s.trim().is_empty());

        let exercise = Exercise::new_private(
            name.to_string(),
            equipment,
            muscle,
            notes,
            image_url,
            user_id,
        );

        tracing::info!(
            exercise_id = %exercise.id,
            user_id = %user_id,
            event = "exercise_created",
            "Created private exercise"
        );

        self.exercise_repository.create(exercise).await
    }
}
