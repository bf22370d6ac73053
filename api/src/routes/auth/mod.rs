//! Authentication routes.

pub mod forgot;
pub mod login;
pub mod logout;
pub mod register;
pub mod reset;
pub mod verify;

pub use forgot::forgot_password;
pub use login::login;
pub use logout::logout;
pub use register::register;
pub use reset::reset_password;
pub use verify::verify;
