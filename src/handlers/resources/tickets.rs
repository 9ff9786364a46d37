// handlers/resources/tickets.rs - /api/tickets

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::{deleted, not_found};
use crate::database::models::ticket::{self, Ticket, TicketInput};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// GET /api/tickets
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Ticket>>> {
    let rows = state.repository::<Ticket>(ticket::TABLE).find_all().await?;
    Ok(Json(rows))
}

/// GET /api/tickets/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Json<Ticket>> {
    let row = state
        .repository::<Ticket>(ticket::TABLE)
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found("Ticket", id))?;
    Ok(Json(row))
}

/// GET /api/tickets/registration/:registration_id - The ticket issued for a registration
pub async fn by_registration(
    State(state): State<AppState>,
    Path(registration_id): Path<Uuid>,
) -> ApiResult<Json<Ticket>> {
    let row = state
        .repository::<Ticket>(ticket::TABLE)
        .find_one_by("registration_id", registration_id)
        .await?
        .ok_or_else(|| {
            ApiError::not_found(format!("No ticket for registration {}", registration_id))
        })?;
    Ok(Json(row))
}

/// GET /api/tickets/event/:event_id
pub async fn by_event(State(state): State<AppState>, Path(event_id): Path<Uuid>) -> ApiResult<Json<Vec<Ticket>>> {
    let rows = state.repository::<Ticket>(ticket::TABLE).find_by("event_id", event_id).await?;
    Ok(Json(rows))
}

/// POST /api/tickets - Generates a ticket code when the body has none
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<TicketInput>,
) -> ApiResult<(StatusCode, Json<Ticket>)> {
    let row = ticket::insert(&state.db, &input).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/tickets/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<TicketInput>,
) -> ApiResult<Json<Ticket>> {
    let row = ticket::update(&state.db, id, &input)
        .await?
        .ok_or_else(|| not_found("Ticket", id))?;
    Ok(Json(row))
}

/// DELETE /api/tickets/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<StatusCode> {
    let removed = state.repository::<Ticket>(ticket::TABLE).delete_by_id(id).await?;
    deleted(removed, "Ticket", id)
}
