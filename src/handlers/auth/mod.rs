// handlers/auth/mod.rs - Identity introspection for authenticated callers

pub mod session;

pub use session::check as session_check;
pub use session::me as session_me;
