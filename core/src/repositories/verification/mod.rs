pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod mock;

pub use mock::MockEmailVerificationRepository;
pub use r#trait::EmailVerificationRepository;
