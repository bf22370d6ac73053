//! # Infrastructure Layer
//!
//! Concrete implementations of the core repository and service traits:
//! - **Database**: MySQL repositories using SQLx
//! - **Mail**: transactional mail provider HTTP API client and a console mock

pub mod database;
pub mod mail;

use thiserror::Error;

/// Errors raised while constructing or talking to infrastructure services
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Mail service error: {0}")]
    Mail(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
