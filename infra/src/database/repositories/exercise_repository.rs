//! MySQL implementation of the exercise catalog store

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, Pool, Row};
use tracing::{debug, error};
use uuid::Uuid;

use gl_core::domain::entities::exercise::{Equipment, Exercise, Muscle, Visibility};
use gl_core::errors::DomainError;
use gl_core::repositories::ExerciseRepository;

/// MySQL-backed exercise catalog
pub struct MySqlExerciseRepository {
    /// Database connection pool
    pool: Pool<MySql>,
}

impl MySqlExerciseRepository {
    /// Create a new exercise repository
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }

    fn row_to_exercise(row: &MySqlRow) -> Result<Exercise, DomainError> {
        let id: String = row.try_get("id").map_err(internal)?;
        let equipment: String = row.try_get("equipment").map_err(internal)?;
        let muscle: String = row.try_get("muscle").map_err(internal)?;
        let visibility: String = row.try_get("visibility").map_err(internal)?;
        let owner_id: Option<String> = row.try_get("owner_id").map_err(internal)?;

        Ok(Exercise {
            id: Uuid::parse_str(&id).map_err(internal)?,
            name: row.try_get("name").map_err(internal)?,
            equipment: equipment.parse::<Equipment>().map_err(internal)?,
            muscle: muscle.parse::<Muscle>().map_err(internal)?,
            notes: row.try_get("notes").map_err(internal)?,
            image_url: row.try_get("image_url").map_err(internal)?,
            visibility: visibility.parse::<Visibility>().map_err(internal)?,
            owner_id: owner_id
                .map(|s| Uuid::parse_str(&s))
                .transpose()
                .map_err(internal)?,
        })
    }
}

fn internal(e: impl std::fmt::Display) -> DomainError {
    DomainError::Internal {
        message: format!("Exercise repository error: {}", e),
    }
}

#[async_trait]
impl ExerciseRepository for MySqlExerciseRepository {
    async fn find_visible(&self, user_id: Uuid) -> Result<Vec<Exercise>, DomainError> {
        let query = r#"
            SELECT id, name, equipment, muscle, notes, image_url, visibility, owner_id
            FROM exercises
            WHERE visibility = 'PUBLIC'
               OR (visibility = 'PRIVATE' AND owner_id = ?)
            ORDER BY name ASC
        "#;

        let rows = sqlx::query(query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(user_id = %user_id, error = %e, "Failed to list exercises");
                internal(e)
            })?;

        rows.iter().map(Self::row_to_exercise).collect()
    }

    async fn find_visible_by_id(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Exercise>, DomainError> {
        let query = r#"
            SELECT id, name, equipment, muscle, notes, image_url, visibility, owner_id
            FROM exercises
            WHERE id = ?
              AND (visibility = 'PUBLIC'
                   OR (visibility = 'PRIVATE' AND owner_id = ?))
        "#;

        let row = sqlx::query(query)
            .bind(id.to_string())
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(exercise_id = %id, error = %e, "Failed to fetch exercise");
                internal(e)
            })?;

        row.as_ref().map(Self::row_to_exercise).transpose()
    }

    async fn create(&self, exercise: Exercise) -> Result<Exercise, DomainError> {
        let query = r#"
            INSERT INTO exercises (
                id, name, equipment, muscle, notes, image_url, visibility, owner_id
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(exercise.id.to_string())
            .bind(&exercise.name)
            .bind(exercise.equipment.as_str())
            .bind(exercise.muscle.as_str())
            .bind(&exercise.notes)
            .bind(&exercise.image_url)
            .bind(exercise.visibility.as_str())
            .bind(exercise.owner_id.map(|id| id.to_string()))
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(exercise_id = %exercise.id, error = %e, "Failed to create exercise");
                internal(e)
            })?;

        debug!(exercise_id = %exercise.id, "Created exercise");

        Ok(exercise)
    }
}
