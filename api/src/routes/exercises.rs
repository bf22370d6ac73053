//! Exercise catalog routes.

use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use gl_core::domain::entities::exercise::{Equipment, Muscle};
use gl_core::errors::ValidationError;
use gl_core::repositories::{
    EmailVerificationRepository, ExerciseRepository, PasswordResetRepository,
    SessionRepository, UserRepository, WorkoutSetRepository,
};
use gl_core::services::verification::MailServiceTrait;
use gl_shared::types::ApiResponse;

use crate::dto::exercise::{CatalogResponse, CreateExerciseRequest, ExerciseCreatedResponse};
use crate::handlers::{to_response, validation_failure};
use crate::routes::AppState;
use crate::session::authenticate;

/// Handler for GET /api/app/exercises
///
/// Everything the caller may see: public entries plus their own private
/// ones, split into a recently-logged shelf and the rest.
pub async fn list_exercises<U, V, R, S, M, E, W>(
    req: HttpRequest,
    state: web::Data<AppState<U, V, R, S, M, E, W>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    V: EmailVerificationRepository + 'static,
    R: PasswordResetRepository + 'static,
    S: SessionRepository + 'static,
    M: MailServiceTrait + 'static,
    E: ExerciseRepository + 'static,
    W: WorkoutSetRepository + 'static,
{
    let user_id = match authenticate(&req, &state.session_service, &state.session_config).await
    {
        Ok(user_id) => user_id,
        Err(error) => return to_response(&error),
    };

    match state.catalog_service.list_for_user(user_id).await {
        Ok(catalog) => HttpResponse::Ok().json(ApiResponse::success(CatalogResponse {
            recent: catalog.recent,
            others: catalog.others,
        })),
        Err(error) => to_response(&error),
    }
}

/// Handler for POST /api/app/exercises
///
/// Creates a private exercise owned by the caller. Equipment and muscle
/// must name members of the closed enumerations.
pub async fn create_exercise<U, V, R, S, M, E, W>(
    req: HttpRequest,
    state: web::Data<AppState<U, V, R, S, M, E, W>>,
    request: web::Json<CreateExerciseRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    V: EmailVerificationRepository + 'static,
    R: PasswordResetRepository + 'static,
    S: SessionRepository + 'static,
    M: MailServiceTrait + 'static,
    E: ExerciseRepository + 'static,
    W: WorkoutSetRepository + 'static,
{
    let user_id = match authenticate(&req, &state.session_service, &state.session_config).await
    {
        Ok(user_id) => user_id,
        Err(error) => return to_response(&error),
    };

    if let Err(errors) = request.validate() {
        return validation_failure(&errors);
    }

    let equipment: Equipment = match request.equipment.parse() {
        Ok(value) => value,
        Err(_) => {
            return to_response(
                &ValidationError::InvalidFormat {
                    field: "equipment".to_string(),
                }
                .into(),
            )
        }
    };
    let muscle: Muscle = match request.muscle.parse() {
        Ok(value) => value,
        Err(_) => {
            return to_response(
                &ValidationError::InvalidFormat {
                    field: "muscle".to_string(),
                }
                .into(),
            )
        }
    };

    match state
        .catalog_service
        .create_private(
            user_id,
            &request.name,
            equipment,
            muscle,
            request.notes.clone(),
            request.image_url.clone(),
        )
        .await
    {
        Ok(exercise) => {
            HttpResponse::Ok().json(ApiResponse::success(ExerciseCreatedResponse { exercise }))
        }
        Err(error) => to_response(&error),
    }
}
