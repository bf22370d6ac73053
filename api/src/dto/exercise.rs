use serde::{Deserialize, Serialize};
use validator::Validate;

use gl_core::domain::entities::exercise::Exercise;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateExerciseRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// One of the closed equipment identifiers
    pub equipment: String,

    /// One of the closed muscle-group identifiers
    pub muscle: String,

    pub notes: Option<String>,

    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    /// Recently logged exercises, most recent first
    pub recent: Vec<Exercise>,
    /// Everything else visible, name ascending
    pub others: Vec<Exercise>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseCreatedResponse {
    pub exercise: Exercise,
}
