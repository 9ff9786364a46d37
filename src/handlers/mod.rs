// handlers/mod.rs - HTTP handlers grouped by surface
//
// public:    utility endpoints, never authenticated (/api/hello, health)
// auth:      identity introspection for the caller's token (/api/auth/*)
// resources: CRUD and finders for the Festify tables (/api/<resource>)
//
// Which routes need a token is decided by `auth::RouteTable`, not by where
// a handler lives.

pub mod auth;
pub mod public;
pub mod resources;
