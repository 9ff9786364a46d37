// handlers/resources/team_members.rs - /api/team-members

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::{deleted, not_found};
use crate::database::models::team_member::{self, TeamMember, TeamMemberInput};
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/team-members
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<TeamMember>>> {
    let rows = state.repository::<TeamMember>(team_member::TABLE).find_all().await?;
    Ok(Json(rows))
}

/// GET /api/team-members/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Json<TeamMember>> {
    let row = state
        .repository::<TeamMember>(team_member::TABLE)
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found("Team member", id))?;
    Ok(Json(row))
}

/// GET /api/team-members/team/:team_id
pub async fn by_team(
    State(state): State<AppState>,
    Path(team_id): Path<Uuid>,
) -> ApiResult<Json<Vec<TeamMember>>> {
    let rows = state
        .repository::<TeamMember>(team_member::TABLE)
        .find_by("team_id", team_id)
        .await?;
    Ok(Json(rows))
}

/// POST /api/team-members
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<TeamMemberInput>,
) -> ApiResult<(StatusCode, Json<TeamMember>)> {
    let row = team_member::insert(&state.db, &input).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/team-members/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<TeamMemberInput>,
) -> ApiResult<Json<TeamMember>> {
    let row = team_member::update(&state.db, id, &input)
        .await?
        .ok_or_else(|| not_found("Team member", id))?;
    Ok(Json(row))
}

/// DELETE /api/team-members/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<StatusCode> {
    let removed = state.repository::<TeamMember>(team_member::TABLE).delete_by_id(id).await?;
    deleted(removed, "Team member", id)
}
