// handlers/resources/categories.rs - /api/categories

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::{deleted, not_found};
use crate::database::models::category::{self, Category, CategoryInput};
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/categories
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Category>>> {
    let rows = state.repository::<Category>(category::TABLE).find_all().await?;
    Ok(Json(rows))
}

/// GET /api/categories/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Json<Category>> {
    let row = state
        .repository::<Category>(category::TABLE)
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found("Category", id))?;
    Ok(Json(row))
}

/// POST /api/categories
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CategoryInput>,
) -> ApiResult<(StatusCode, Json<Category>)> {
    let row = category::insert(&state.db, &input).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/categories/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<CategoryInput>,
) -> ApiResult<Json<Category>> {
    let row = category::update(&state.db, id, &input)
        .await?
        .ok_or_else(|| not_found("Category", id))?;
    Ok(Json(row))
}

/// DELETE /api/categories/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<StatusCode> {
    let removed = state.repository::<Category>(category::TABLE).delete_by_id(id).await?;
    deleted(removed, "Category", id)
}
