//! Configuration module with business-specific sub-modules
//!
//! Configuration is environment-driven: each sub-config reads its values
//! from environment variables with sensible development defaults. The
//! hosting binary loads everything once at startup and passes the typed
//! structs down; nothing reads the environment after boot.

pub mod database;
pub mod environment;
pub mod mail;
pub mod server;
pub mod session;

use serde::{Deserialize, Serialize};

pub use database::DatabaseConfig;
pub use environment::Environment;
pub use mail::MailConfig;
pub use server::ServerConfig;
pub use session::SessionConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment the server runs in
    pub environment: Environment,

    /// HTTP server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Mail provider configuration
    pub mail: MailConfig,

    /// Session cookie configuration
    pub session: SessionConfig,
}

impl AppConfig {
    /// Load the complete configuration from environment variables
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            mail: MailConfig::from_env(),
            session: SessionConfig::for_environment(environment),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            mail: MailConfig::default(),
            session: SessionConfig::default(),
        }
    }
}
