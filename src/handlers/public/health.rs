// handlers/public/health.rs - GET /api/health and /actuator/health handler

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::warn;

use crate::database::manager;
use crate::state::AppState;

/// GET /api/health - Service and database status
///
/// 200 with `"database": "UP"` when the pool answers, 503 with `"DOWN"`
/// otherwise. Error details stay in the log.
pub async fn get(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match manager::health_check(&state.db).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "UP",
                "database": "UP",
                "timestamp": now,
            })),
        ),
        Err(e) => {
            warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "UP",
                    "database": "DOWN",
                    "timestamp": now,
                })),
            )
        }
    }
}
