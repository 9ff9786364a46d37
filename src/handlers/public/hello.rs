// handlers/public/hello.rs - GET /api/hello handler

use axum::Json;
use serde_json::{json, Value};

/// GET /api/hello - Liveness probe for the frontend
pub async fn get() -> Json<Value> {
    Json(json!({ "message": "Hello from Festify API" }))
}
