// handlers/public/mod.rs - Utility endpoints that never require a token

pub mod health;
pub mod hello;

pub use health::get as health_get;
pub use hello::get as hello_get;
