//! MySQL implementation of the workout log store

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, Pool, Row};
use tracing::{debug, error};
use uuid::Uuid;

use gl_core::domain::entities::workout_set::WorkoutSet;
use gl_core::errors::DomainError;
use gl_core::repositories::WorkoutSetRepository;

/// MySQL-backed workout log
pub struct MySqlWorkoutSetRepository {
    /// Database connection pool
    pool: Pool<MySql>,
}

impl MySqlWorkoutSetRepository {
    /// Create a new workout set repository
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }

    fn row_to_set(row: &MySqlRow) -> Result<WorkoutSet, DomainError> {
        let id: String = row.try_get("id").map_err(internal)?;
        let user_id: String = row.try_get("user_id").map_err(internal)?;
        let exercise_id: String = row.try_get("exercise_id").map_err(internal)?;
        Ok(WorkoutSet {
            id: Uuid::parse_str(&id).map_err(internal)?,
            user_id: Uuid::parse_str(&user_id).map_err(internal)?,
            exercise_id: Uuid::parse_str(&exercise_id).map_err(internal)?,
            logged_at: row.try_get("logged_at").map_err(internal)?,
            weight_kg: row.try_get("weight_kg").map_err(internal)?,
            reps: row.try_get("reps").map_err(internal)?,
            comment: row.try_get("comment").map_err(internal)?,
        })
    }
}

fn internal(e: impl std::fmt::Display) -> DomainError {
    DomainError::Internal {
        message: format!("Workout repository error: {}", e),
    }
}

#[async_trait]
impl WorkoutSetRepository for MySqlWorkoutSetRepository {
    async fn create(&self, set: WorkoutSet) -> Result<WorkoutSet, DomainError> {
        let query = r#"
            INSERT INTO workout_sets (
                id, user_id, exercise_id, logged_at, weight_kg, reps, comment
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(set.id.to_string())
            .bind(set.user_id.to_string())
            .bind(set.exercise_id.to_string())
            .bind(set.logged_at)
            .bind(set.weight_kg)
            .bind(set.reps)
            .bind(&set.comment)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(set_id = %set.id, error = %e, "Failed to record set");
                internal(e)
            })?;

        debug!(set_id = %set.id, exercise_id = %set.exercise_id, "Recorded set");

        Ok(set)
    }

    async fn list_for_exercise(
        &self,
        user_id: Uuid,
        exercise_id: Uuid,
        limit: u32,
    ) -> Result<Vec<WorkoutSet>, DomainError> {
        let query = r#"
            SELECT id, user_id, exercise_id, logged_at, weight_kg, reps, comment
            FROM workout_sets
            WHERE user_id = ? AND exercise_id = ?
            ORDER BY logged_at DESC
            LIMIT ?
        "#;

        let rows = sqlx::query(query)
            .bind(user_id.to_string())
            .bind(exercise_id.to_string())
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(
                    user_id = %user_id,
                    exercise_id = %exercise_id,
                    error = %e,
                    "Failed to list sets"
                );
                internal(e)
            })?;

        rows.iter().map(Self::row_to_set).collect()
    }

    async fn latest_exercise_ids(
        &self,
        user_id: Uuid,
        limit: u32,
    ) -> Result<Vec<Uuid>, DomainError> {
        let query = r#"
            SELECT exercise_id
            FROM workout_sets
            WHERE user_id = ?
            ORDER BY logged_at DESC
            LIMIT ?
        "#;

        let rows = sqlx::query(query)
            .bind(user_id.to_string())
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(user_id = %user_id, error = %e, "Failed to list recent exercises");
                internal(e)
            })?;

        rows.iter()
            .map(|row| {
                let id: String = row.try_get("exercise_id").map_err(internal)?;
                Uuid::parse_str(&id).map_err(internal)
            })
            .collect()
    }
}
