//! Application factory
//!
//! Builds the Actix application around an [`AppState`] whose concrete
//! repository and service types are chosen by the caller (MySQL in the
//! binary, in-memory mocks in tests).

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use gl_core::repositories::{
    EmailVerificationRepository, ExerciseRepository, PasswordResetRepository,
    SessionRepository, UserRepository, WorkoutSetRepository,
};
use gl_core::services::verification::MailServiceTrait;
use gl_shared::types::ApiResponse;

use crate::middleware::cors::create_cors;
use crate::routes::auth::{forgot_password, login, logout, register, reset_password, verify};
use crate::routes::exercises::{create_exercise, list_exercises};
use crate::routes::health::health_check;
use crate::routes::logs::{list_logs, record_set};
use crate::routes::AppState;

/// Create and configure the application with all dependencies
pub fn create_app<U, V, R, S, M, E, W>(
    app_state: web::Data<AppState<U, V, R, S, M, E, W>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<
            actix_web::body::EitherBody<
                tracing_actix_web::StreamSpan<actix_web::body::BoxBody>,
            >,
        >,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    V: EmailVerificationRepository + 'static,
    R: PasswordResetRepository + 'static,
    S: SessionRepository + 'static,
    M: MailServiceTrait + 'static,
    E: ExerciseRepository + 'static,
    W: WorkoutSetRepository + 'static,
{
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .wrap(TracingLogger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check::<U, V, R, S, M, E, W>))
        // API routes
        .service(
            web::scope("/api")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(register::<U, V, R, S, M, E, W>))
                        .route("/verify", web::post().to(verify::<U, V, R, S, M, E, W>))
                        .route("/login", web::post().to(login::<U, V, R, S, M, E, W>))
                        .route("/logout", web::post().to(logout::<U, V, R, S, M, E, W>))
                        .route(
                            "/forgot",
                            web::post().to(forgot_password::<U, V, R, S, M, E, W>),
                        )
                        .route(
                            "/reset",
                            web::post().to(reset_password::<U, V, R, S, M, E, W>),
                        ),
                )
                .service(
                    web::scope("/app")
                        .route(
                            "/exercises",
                            web::get().to(list_exercises::<U, V, R, S, M, E, W>),
                        )
                        .route(
                            "/exercises",
                            web::post().to(create_exercise::<U, V, R, S, M, E, W>),
                        )
                        .route("/logs", web::get().to(list_logs::<U, V, R, S, M, E, W>))
                        .route("/logs", web::post().to(record_set::<U, V, R, S, M, E, W>)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::error("The requested resource was not found"))
}
