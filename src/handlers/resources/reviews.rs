// handlers/resources/reviews.rs - /api/reviews

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::{deleted, not_found};
use crate::database::models::review::{self, Review, ReviewInput};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Review>>> {
    let rows = state.repository::<Review>(review::TABLE).find_all().await?;
    Ok(Json(rows))
}

pub async fn get(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Json<Review>> {
    let row = state
        .repository::<Review>(review::TABLE)
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found("Review", id))?;
    Ok(Json(row))
}

pub async fn by_event(State(state): State<AppState>, Path(event_id): Path<Uuid>) -> ApiResult<Json<Vec<Review>>> {
    let rows = state.repository::<Review>(review::TABLE).find_by("event_id", event_id).await?;
    Ok(Json(rows))
}

pub async fn by_user(State(state): State<AppState>, Path(user_id): Path<Uuid>) -> ApiResult<Json<Vec<Review>>> {
    let rows = state.repository::<Review>(review::TABLE).find_by("user_id", user_id).await?;
    Ok(Json(rows))
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ReviewInput>,
) -> ApiResult<(StatusCode, Json<Review>)> {
    let row = review::insert(&state.db, &input).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<ReviewInput>,
) -> ApiResult<Json<Review>> {
    let row = review::update(&state.db, id, &input)
        .await?
        .ok_or_else(|| not_found("Review", id))?;
    Ok(Json(row))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<StatusCode> {
    let removed = state.repository::<Review>(review::TABLE).delete_by_id(id).await?;
    deleted(removed, "Review", id)
}
