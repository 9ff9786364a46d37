// handlers/auth/session.rs - GET /api/auth/me and GET /api/auth/check

use axum::Json;
use serde_json::{json, Value};

use crate::auth::Identity;

/// GET /api/auth/me - Who the bearer token says the caller is
pub async fn me(identity: Identity) -> Json<Value> {
    Json(json!({
        "email": identity.name,
        "userId": identity.subject,
        "roles": identity.authorities,
        "authenticated": true,
    }))
}

/// GET /api/auth/check - Cheap token validity probe
pub async fn check(identity: Identity) -> Json<Value> {
    Json(json!({
        "message": "Authentication successful",
        "user": identity.name,
    }))
}
