//! Health check route.

use actix_web::{web, HttpResponse};

use gl_core::repositories::{
    EmailVerificationRepository, ExerciseRepository, PasswordResetRepository,
    SessionRepository, UserRepository, WorkoutSetRepository,
};
use gl_core::services::verification::MailServiceTrait;

use crate::routes::AppState;

/// Handler for GET /health
///
/// Liveness plus configuration presence flags; never values.
pub async fn health_check<U, V, R, S, M, E, W>(
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
    HttpResponse::Ok().json(serde_json::json!({
        "ok": true,
        "service": "gymlog-api",
        "version": env!("CARGO_PKG_VERSION"),
        "has_database": state.database_configured,
        "has_mail": state.mail_configured,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
