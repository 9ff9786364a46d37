// handlers/resources/teams.rs - /api/teams

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::{deleted, not_found};
use crate::database::models::team::{self, Team, TeamInput};
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/teams
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Team>>> {
    let rows = state.repository::<Team>(team::TABLE).find_all().await?;
    Ok(Json(rows))
}

/// GET /api/teams/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Json<Team>> {
    let row = state
        .repository::<Team>(team::TABLE)
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found("Team", id))?;
    Ok(Json(row))
}

/// GET /api/teams/event/:event_id
pub async fn by_event(State(state): State<AppState>, Path(event_id): Path<Uuid>) -> ApiResult<Json<Vec<Team>>> {
    let rows = state.repository::<Team>(team::TABLE).find_by("event_id", event_id).await?;
    Ok(Json(rows))
}

/// GET /api/teams/leader/:leader_id - Teams whose leader profile is `leader_id`
pub async fn by_leader(State(state): State<AppState>, Path(leader_id): Path<Uuid>) -> ApiResult<Json<Vec<Team>>> {
    let rows = state.repository::<Team>(team::TABLE).find_by("team_leader_id", leader_id).await?;
    Ok(Json(rows))
}

/// POST /api/teams
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<TeamInput>,
) -> ApiResult<(StatusCode, Json<Team>)> {
    let row = team::insert(&state.db, &input).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/teams/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<TeamInput>,
) -> ApiResult<Json<Team>> {
    let row = team::update(&state.db, id, &input)
        .await?
        .ok_or_else(|| not_found("Team", id))?;
    Ok(Json(row))
}

/// DELETE /api/teams/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<StatusCode> {
    let removed = state.repository::<Team>(team::TABLE).delete_by_id(id).await?;
    deleted(removed, "Team", id)
}
