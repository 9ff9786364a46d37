// handlers/resources/registrations.rs - /api/registrations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::{deleted, not_found};
use crate::database::models::registration::{self, Registration, RegistrationInput};
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/registrations
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Registration>>> {
    let rows = state.repository::<Registration>(registration::TABLE).find_all().await?;
    Ok(Json(rows))
}

/// GET /api/registrations/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Json<Registration>> {
    let row = state
        .repository::<Registration>(registration::TABLE)
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found("Registration", id))?;
    Ok(Json(row))
}

/// GET /api/registrations/event/:event_id
pub async fn by_event(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> ApiResult<Json<Vec<Registration>>> {
    let rows = state
        .repository::<Registration>(registration::TABLE)
        .find_by("event_id", event_id)
        .await?;
    Ok(Json(rows))
}

/// GET /api/registrations/user/:user_id
pub async fn by_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<Vec<Registration>>> {
    let rows = state
        .repository::<Registration>(registration::TABLE)
        .find_by("user_id", user_id)
        .await?;
    Ok(Json(rows))
}

/// POST /api/registrations
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<RegistrationInput>,
) -> ApiResult<(StatusCode, Json<Registration>)> {
    let row = registration::insert(&state.db, &input).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/registrations/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<RegistrationInput>,
) -> ApiResult<Json<Registration>> {
    let row = registration::update(&state.db, id, &input)
        .await?
        .ok_or_else(|| not_found("Registration", id))?;
    Ok(Json(row))
}

/// DELETE /api/registrations/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<StatusCode> {
    let removed = state.repository::<Registration>(registration::TABLE).delete_by_id(id).await?;
    deleted(removed, "Registration", id)
}
