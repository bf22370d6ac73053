use actix_web::{web, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gl_core::services::auth::{AuthService, AuthServiceConfig};
use gl_core::services::catalog::CatalogService;
use gl_core::services::session::SessionService;
use gl_core::services::verification::{VerificationService, VerificationServiceConfig};
use gl_infra::database::{
    create_pool, MySqlEmailVerificationRepository, MySqlExerciseRepository,
    MySqlPasswordResetRepository, MySqlSessionRepository, MySqlUserRepository,
    MySqlWorkoutSetRepository,
};
use gl_infra::mail::MailBackend;
use gl_core::services::workout::WorkoutService;
use gl_shared::config::AppConfig;

use gl_api::app;
use gl_api::routes::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();
    info!(environment = %config.environment, "Starting GymLog API server");

    // Build the dependency graph once at startup; everything below is
    // injected, nothing is process-global
    let pool = create_pool(&config.database)
        .await
        .context("failed to create the database pool")?;

    let user_repository = Arc::new(MySqlUserRepository::new(pool.clone()));
    let verification_repository = Arc::new(MySqlEmailVerificationRepository::new(pool.clone()));
    let reset_repository = Arc::new(MySqlPasswordResetRepository::new(pool.clone()));
    let session_repository = Arc::new(MySqlSessionRepository::new(pool.clone()));
    let exercise_repository = Arc::new(MySqlExerciseRepository::new(pool.clone()));
    let workout_repository = Arc::new(MySqlWorkoutSetRepository::new(pool));

    let mail_service =
        Arc::new(MailBackend::from_config(&config.mail).context("failed to set up mail")?);

    let verification_service = Arc::new(VerificationService::new(
        verification_repository,
        reset_repository,
        mail_service,
        VerificationServiceConfig::default(),
    ));
    let session_service = Arc::new(SessionService::new(
        session_repository,
        config.session.ttl_days,
    ));
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        verification_service,
        session_service.clone(),
        AuthServiceConfig::default(),
    ));
    let catalog_service = Arc::new(CatalogService::new(
        exercise_repository.clone(),
        workout_repository.clone(),
    ));
    let workout_service = Arc::new(WorkoutService::new(exercise_repository, workout_repository));

    let app_state = web::Data::new(AppState {
        auth_service,
        session_service,
        catalog_service,
        workout_service,
        session_config: config.session.clone(),
        database_configured: config.database.is_configured(),
        mail_configured: config.mail.is_configured(),
    });

    let bind_address = config.server.bind_address();
    info!(bind_address = %bind_address, "Server binding");

    let workers = config.server.workers;
    let mut server = HttpServer::new(move || app::create_app(app_state.clone()));
    if workers > 0 {
        server = server.workers(workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server terminated with an error")
}
