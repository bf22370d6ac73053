//! Login session service.

mod service;

pub use service::SessionService;
