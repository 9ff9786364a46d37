pub mod auth;
pub mod authorize;

pub use auth::authenticate;
pub use authorize::require_identity;
