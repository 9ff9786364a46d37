pub mod route;
pub mod token;
