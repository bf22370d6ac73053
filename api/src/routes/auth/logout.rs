use actix_web::{web, HttpRequest, HttpResponse};

use gl_core::repositories::{
    EmailVerificationRepository, ExerciseRepository, PasswordResetRepository,
    SessionRepository, UserRepository, WorkoutSetRepository,
};
use gl_core::services::verification::MailServiceTrait;
use gl_shared::types::ApiResponse;

use crate::dto::auth::SessionResponse;
use crate::handlers::to_response;
use crate::routes::AppState;
use crate::session::{clear_session_cookie, session_token};

/// Handler for POST /api/auth/logout
///
/// Revokes the server-side session (if any) and clears the cookie. Always
/// succeeds for the client.
pub async fn logout<U, V, R, S, M, E, W>(
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
    if let Some(token) = session_token(&req, &state.session_config) {
        if let Err(error) = state.auth_service.logout(&token).await {
            return to_response(&error);
        }
    }

    HttpResponse::Ok()
        .cookie(clear_session_cookie(&state.session_config))
        .json(ApiResponse::success(SessionResponse {
            message: "Logged out.".to_string(),
        }))
}
