//! Request and response DTOs.

pub mod auth;
pub mod exercise;
pub mod workout;
