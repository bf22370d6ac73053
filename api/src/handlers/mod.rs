//! Request handling helpers.

pub mod error;

pub use error::{to_response, validation_failure};
