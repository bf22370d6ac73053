//! Exercise catalog service.

mod service;

pub use service::{CatalogService, ExerciseCatalog};
