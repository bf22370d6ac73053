//! # GymLog Core
//!
//! Core business logic and domain layer for the GymLog backend.
//! This crate contains domain entities, business services, repository
//! interfaces, and error types that form the foundation of the application
//! architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export the error types used at every layer boundary
pub use errors::{AuthError, DomainError, DomainResult, ValidationError};
