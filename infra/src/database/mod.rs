//! MySQL persistence implementations.

pub mod connection;
pub mod repositories;

pub use connection::create_pool;
pub use repositories::{
    MySqlEmailVerificationRepository, MySqlExerciseRepository, MySqlPasswordResetRepository,
    MySqlSessionRepository, MySqlUserRepository, MySqlWorkoutSetRepository,
};
