//! HTTP route handlers.

pub mod auth;
pub mod exercises;
pub mod health;
pub mod logs;

use std::sync::Arc;

use gl_core::repositories::{
    EmailVerificationRepository, ExerciseRepository, PasswordResetRepository,
    SessionRepository, UserRepository, WorkoutSetRepository,
};
use gl_core::services::auth::AuthService;
use gl_core::services::catalog::CatalogService;
use gl_core::services::session::SessionService;
use gl_core::services::verification::MailServiceTrait;
use gl_core::services::workout::WorkoutService;
use gl_shared::config::SessionConfig;

/// Application state holding the shared services
pub struct AppState<U, V, R, S, M, E, W>
where
    U: UserRepository,
    V: EmailVerificationRepository,
    R: PasswordResetRepository,
    S: SessionRepository,
    M: MailServiceTrait,
    E: ExerciseRepository,
    W: WorkoutSetRepository,
{
    pub auth_service: Arc<AuthService<U, V, R, S, M>>,
    pub session_service: Arc<SessionService<S>>,
    pub catalog_service: Arc<CatalogService<E, W>>,
    pub workout_service: Arc<WorkoutService<E, W>>,
    pub session_config: SessionConfig,
    pub database_configured: bool,
    pub mail_configured: bool,
}
