use actix_web::{web, HttpResponse};
use chrono::Utc;
use validator::Validate;

use gl_core::repositories::{
    EmailVerificationRepository, ExerciseRepository, PasswordResetRepository,
    SessionRepository, UserRepository, WorkoutSetRepository,
};
use gl_core::services::verification::MailServiceTrait;
use gl_shared::types::ApiResponse;

use crate::dto::auth::{CodeSentResponse, ForgotPasswordRequest};
use crate::handlers::{to_response, validation_failure};
use crate::routes::AppState;

/// Handler for POST /api/auth/forgot
///
/// Dispatches a password reset code to an existing account.
pub async fn forgot_password<U, V, R, S, M, E, W>(
    state: web::Data<AppState<U, V, R, S, M, E, W>>,
    request: web::Json<ForgotPasswordRequest>,
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

    match state.auth_service.request_reset(&request.email).await {
        Ok(result) => {
            let resend_after = (result.next_resend_at - Utc::now()).num_seconds().max(0);
            HttpResponse::Ok().json(ApiResponse::success(CodeSentResponse {
                message: "Password reset code sent. Check your inbox.".to_string(),
                resend_after,
            }))
        }
        Err(error) => to_response(&error),
    }
}
