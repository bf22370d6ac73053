use actix_web::{web, HttpResponse};
use validator::Validate;

use gl_core::repositories::{
    EmailVerificationRepository, ExerciseRepository, PasswordResetRepository,
    SessionRepository, UserRepository, WorkoutSetRepository,
};
use gl_core::services::verification::MailServiceTrait;
use gl_shared::types::ApiResponse;

use crate::dto::auth::{SessionResponse, VerifyRequest};
use crate::handlers::{to_response, validation_failure};
use crate::routes::AppState;
use crate::session::session_cookie;

/// Handler for POST /api/auth/verify
///
/// Confirms the verification code, creates the account, and logs the new
/// user in by setting the session cookie.
pub async fn verify<U, V, R, S, M, E, W>(
    state: web::Data<AppState<U, V, R, S, M, E, W>>,
    request: web::Json<VerifyRequest>,
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
        .confirm_verification(&request.email, &request.code)
        .await
    {
        Ok(session) => HttpResponse::Ok()
            .cookie(session_cookie(&state.session_config, session.token))
            .json(ApiResponse::success(SessionResponse {
                message: "Account created.".to_string(),
            })),
        Err(error) => to_response(&error),
    }
}
