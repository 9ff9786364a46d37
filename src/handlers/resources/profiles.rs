// handlers/resources/profiles.rs - /api/profiles
//
// Profiles are keyed by the Supabase user id, so create takes the id from
// the body instead of generating one.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::{deleted, not_found};
use crate::database::models::profile::{self, Profile, ProfileInput};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// GET /api/profiles
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Profile>>> {
    let rows = state.repository::<Profile>(profile::TABLE).find_all().await?;
    Ok(Json(rows))
}

/// GET /api/profiles/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Json<Profile>> {
    let row = state
        .repository::<Profile>(profile::TABLE)
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found("Profile", id))?;
    Ok(Json(row))
}

/// GET /api/profiles/user/:user_id - Same lookup as by id; the profile id is the auth user id
pub async fn by_user(state: State<AppState>, user_id: Path<Uuid>) -> ApiResult<Json<Profile>> {
    get(state, user_id).await
}

/// GET /api/profiles/email/:email
pub async fn by_email(State(state): State<AppState>, Path(email): Path<String>) -> ApiResult<Json<Profile>> {
    let row = state
        .repository::<Profile>(profile::TABLE)
        .find_one_by("email", email.clone())
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Profile with email {} not found", email)))?;
    Ok(Json(row))
}

/// POST /api/profiles
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ProfileInput>,
) -> ApiResult<(StatusCode, Json<Profile>)> {
    let id = input
        .id
        .ok_or_else(|| ApiError::bad_request("Profile id is required"))?;

    let row = profile::insert(&state.db, id, &input).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/profiles/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<ProfileInput>,
) -> ApiResult<Json<Profile>> {
    let row = profile::update(&state.db, id, &input)
        .await?
        .ok_or_else(|| not_found("Profile", id))?;
    Ok(Json(row))
}

/// DELETE /api/profiles/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<StatusCode> {
    let removed = state.repository::<Profile>(profile::TABLE).delete_by_id(id).await?;
    deleted(removed, "Profile", id)
}
