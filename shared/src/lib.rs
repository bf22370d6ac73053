//! Shared utilities and common types for the GymLog server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - API response structures
//! - Utility functions (email validation, log grouping)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, DatabaseConfig, Environment, MailConfig, ServerConfig, SessionConfig,
};
pub use types::ApiResponse;
pub use utils::{grouping, validation};
