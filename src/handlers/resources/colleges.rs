// handlers/resources/colleges.rs - /api/colleges

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::{deleted, not_found};
use crate::database::models::college::{self, College, CollegeInput};
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/colleges - All colleges
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<College>>> {
    let rows = state.repository::<College>(college::TABLE).find_all().await?;
    Ok(Json(rows))
}

/// GET /api/colleges/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Json<College>> {
    let row = state
        .repository::<College>(college::TABLE)
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found("College", id))?;
    Ok(Json(row))
}

/// POST /api/colleges
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CollegeInput>,
) -> ApiResult<(StatusCode, Json<College>)> {
    let row = college::insert(&state.db, &input).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/colleges/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<CollegeInput>,
) -> ApiResult<Json<College>> {
    let row = college::update(&state.db, id, &input)
        .await?
        .ok_or_else(|| not_found("College", id))?;
    Ok(Json(row))
}

/// DELETE /api/colleges/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<StatusCode> {
    let removed = state.repository::<College>(college::TABLE).delete_by_id(id).await?;
    deleted(removed, "College", id)
}
