//! Set recording and per-exercise history

use std::sync::Arc;
use uuid::Uuid;

use gl_shared::utils::grouping::{group_by_day, DayGroup};

use crate::domain::entities::workout_set::WorkoutSet;
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::{ExerciseRepository, WorkoutSetRepository};

/// Most sets returned for one exercise's history
const HISTORY_LIMIT: u32 = 300;

/// Workout logging service
pub struct WorkoutService<E, W>
where
    E: ExerciseRepository,
    W: WorkoutSetRepository,
{
    /// Catalog store, for visibility checks
    exercise_repository: Arc<E>,
    /// Workout log store
    workout_repository: Arc<W>,
}

impl<E, W> WorkoutService<E, W>
where
    E: ExerciseRepository,
    W: WorkoutSetRepository,
{
    /// Create a new workout service
    pub fn new(exercise_repository: Arc<E>, workout_repository: Arc<W>) -> Self {
        Self {
            exercise_repository,
            workout_repository,
        }
    }

    /// Record one set against an exercise visible to the user
    pub async fn record_set(
        &self,
        user_id: Uuid,
        exercise_id: Uuid,
        weight_kg: f64,
        reps: i32,
        comment: Option<String>,
    ) -> DomainResult<WorkoutSet> {
        if !weight_kg.is_finite() || weight_kg < 0.0 {
            return Err(ValidationError::OutOfRange {
                field: "weight_kg".to_string(),
            }
            .into());
        }
        if reps <= 0 {
            return Err(ValidationError::OutOfRange {
                field: "reps".to_string(),
            }
            .into());
        }

        self.require_visible(exercise_id, user_id).await?;

        let comment = comment.filter(|s| !s.trim().is_empty());
        let set = WorkoutSet::new(user_id, exercise_id, weight_kg, reps, comment);

        tracing::debug!(
            user_id = %user_id,
            exercise_id = %exercise_id,
            event = "set_recorded",
            "Recorded workout set"
        );

        self.workout_repository.create(set).await
    }

    /// The user's history for one exercise, newest first
    pub async fn history(
        &self,
        user_id: Uuid,
        exercise_id: Uuid,
    ) -> DomainResult<Vec<WorkoutSet>> {
        self.require_visible(exercise_id, user_id).await?;
        self.workout_repository
            .list_for_exercise(user_id, exercise_id, HISTORY_LIMIT)
            .await
    }

    /// History grouped into calendar-day buckets, newest day first
    pub async fn history_by_day(
        &self,
        user_id: Uuid,
        exercise_id: Uuid,
    ) -> DomainResult<Vec<DayGroup<WorkoutSet>>> {
        let sets = self.history(user_id, exercise_id).await?;
        Ok(group_by_day(sets, |s| s.day()))
    }

    async fn require_visible(&self, exercise_id: Uuid, user_id: Uuid) -> DomainResult<()> {
        self.exercise_repository
            .find_visible_by_id(exercise_id, user_id)
            .await?
            .map(|_| ())
            .ok_or(DomainError::NotFound {
                resource: "exercise".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::exercise::{Equipment, Exercise, Muscle, Visibility};
    use crate::repositories::{MockExerciseRepository, MockWorkoutSetRepository};
    use chrono::{Duration, Utc};

    async fn service_with_exercise() -> (
        WorkoutService<MockExerciseRepository, MockWorkoutSetRepository>,
        Uuid,
        Uuid,
    ) {
        let exercises = Arc::new(MockExerciseRepository::new());
        let workouts = Arc::new(MockWorkoutSetRepository::new());
        let user_id = Uuid::new_v4();

        let exercise = Exercise {
            id: Uuid::new_v4(),
            name: "Deadlift".to_string(),
            equipment: Equipment::Barbell,
            muscle: Muscle::Back,
            notes: None,
            image_url: None,
            visibility: Visibility::Public,
            owner_id: None,
        };
        let exercise_id = exercise.id;
        exercises.put(exercise).await;

        (
            WorkoutService::new(exercises, workouts),
            user_id,
            exercise_id,
        )
    }

    #[tokio::test]
    async fn test_record_and_list() {
        let (service, user_id, exercise_id) = service_with_exercise().await;

        service
            .record_set(user_id, exercise_id, 120.0, 5, Some("felt heavy".to_string()))
            .await
            .unwrap();
        service
            .record_set(user_id, exercise_id, 125.0, 3, None)
            .await
            .unwrap();

        let history = service.history(user_id, exercise_id).await.unwrap();
        assert_eq!(history.len(), 2);
        // Newest first
        assert_eq!(history[0].weight_kg, 125.0);
    }

    #[tokio::test]
    async fn test_rejects_bad_inputs() {
        let (service, user_id, exercise_id) = service_with_exercise().await;

        assert!(service
            .record_set(user_id, exercise_id, -1.0, 5, None)
            .await
            .is_err());
        assert!(service
            .record_set(user_id, exercise_id, f64::NAN, 5, None)
            .await
            .is_err());
        assert!(service
            .record_set(user_id, exercise_id, 50.0, 0, None)
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_unknown_exercise_not_found() {
        let (service, user_id, _) = service_with_exercise().await;
        let result = service
            .record_set(user_id, Uuid::new_v4(), 50.0, 5, None)
            .await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_history_grouped_by_day() {
        let (service, user_id, exercise_id) = service_with_exercise().await;

        service
            .record_set(user_id, exercise_id, 100.0, 5, None)
            .await
            .unwrap();
        let old = {
            let mut set = WorkoutSet::new(user_id, exercise_id, 90.0, 8, None);
            set.logged_at = Utc::now() - Duration::days(2);
            set
        };
        // Direct insert to backdate
        service.workout_repository.create(old).await.unwrap();

        let groups = service.history_by_day(user_id, exercise_id).await.unwrap();
        assert_eq!(groups.len(), 2);
        assert!(groups[0].day > groups[1].day);
    }
}
