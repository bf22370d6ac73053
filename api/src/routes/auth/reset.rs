use actix_web::{web, HttpResponse};
use validator::Validate;

use gl_core::repositories::{
    EmailVerificationRepository, ExerciseRepository, PasswordResetRepository,
    SessionRepository, UserRepository, WorkoutSetRepository,
};
use gl_core::services::verification::MailServiceTrait;
use gl_shared::types::ApiResponse;

use crate::dto::auth::{ResetPasswordRequest, SessionResponse};
use crate::handlers::{to_response, validation_failure};
use crate::routes::AppState;
use crate::session::session_cookie;

/// Handler for POST /api/auth/reset
///
/// Confirms the reset code, sets the new password, and logs the user in.
pub async fn reset_password<U, V, R, S, M, E, W>(
    state: web::Data<AppState<U, V, R, S, M, E, W>>,
    request: web::Json<ResetPasswordRequest>,
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
    if let Err(errors) = request.validate() {
        return validation_failure(&errors);
    }

    match state
        .auth_service
        .confirm_reset(&request.email, &request.code, &request.new_password)
        .await
    {
        Ok(session) => HttpResponse::Ok()
            .cookie(session_cookie(&state.session_config, session.token))
            .json(ApiResponse::success(SessionResponse {
                message: "Password updated.".to_string(),
            })),
        Err(error) => to_response(&error),
    }
}
