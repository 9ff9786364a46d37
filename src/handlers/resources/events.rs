// handlers/resources/events.rs - /api/events and its finders

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use super::{deleted, not_found};
use crate::database::models::event::{self, Event, EventInput, EventLinks};
use crate::database::models::{category, college, profile, Category, College, EventStatus, Profile};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// GET /api/events
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Event>>> {
    let rows = state.repository::<Event>(event::TABLE).find_all().await?;
    Ok(Json(rows))
}

/// GET /api/events/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Json<Event>> {
    let row = state
        .repository::<Event>(event::TABLE)
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found("Event", id))?;
    Ok(Json(row))
}

/// GET /api/events/college/:college_id
pub async fn by_college(
    State(state): State<AppState>,
    Path(college_id): Path<Uuid>,
) -> ApiResult<Json<Vec<Event>>> {
    let rows = state.repository::<Event>(event::TABLE).find_by("college_id", college_id).await?;
    Ok(Json(rows))
}

/// GET /api/events/category/:category_id
pub async fn by_category(
    State(state): State<AppState>,
    Path(category_id): Path<Uuid>,
) -> ApiResult<Json<Vec<Event>>> {
    let rows = state.repository::<Event>(event::TABLE).find_by("category_id", category_id).await?;
    Ok(Json(rows))
}

/// GET /api/events/organizer/:organizer_id
pub async fn by_organizer(
    State(state): State<AppState>,
    Path(organizer_id): Path<Uuid>,
) -> ApiResult<Json<Vec<Event>>> {
    let rows = state.repository::<Event>(event::TABLE).find_by("organizer_id", organizer_id).await?;
    Ok(Json(rows))
}

/// GET /api/events/status/:status - `status` is an upper-case label, e.g. PUBLISHED
pub async fn by_status(
    State(state): State<AppState>,
    Path(status): Path<EventStatus>,
) -> ApiResult<Json<Vec<Event>>> {
    let rows = state.repository::<Event>(event::TABLE).find_by("status", status).await?;
    Ok(Json(rows))
}

/// GET /api/events/upcoming - Published events starting in the future, soonest first
pub async fn upcoming(State(state): State<AppState>) -> ApiResult<Json<Vec<Event>>> {
    let rows = event::find_upcoming(&state.db, Utc::now()).await?;
    Ok(Json(rows))
}

/// POST /api/events
///
/// Category, college and organizer must all be given and must exist; the
/// first one that is missing decides the 400 message.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<EventInput>,
) -> ApiResult<(StatusCode, Json<Event>)> {
    let category_id = require_link(input.category_id, "Category")?;
    ensure_exists(state.repository::<Category>(category::TABLE).exists(category_id).await?, "Category")?;

    let college_id = require_link(input.college_id, "College")?;
    ensure_exists(state.repository::<College>(college::TABLE).exists(college_id).await?, "College")?;

    let organizer_id = require_link(input.organizer_id, "Organizer")?;
    ensure_exists(state.repository::<Profile>(profile::TABLE).exists(organizer_id).await?, "Organizer")?;

    let row = event::insert(&state.db, &input, category_id, college_id, organizer_id).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/events/:id
///
/// Scalar fields are replaced. A relation id that points at nothing is
/// ignored and the event keeps its current link.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<EventInput>,
) -> ApiResult<Json<Event>> {
    let mut links = EventLinks::default();

    if let Some(category_id) = input.category_id {
        if state.repository::<Category>(category::TABLE).exists(category_id).await? {
            links.category_id = Some(category_id);
        }
    }
    if let Some(college_id) = input.college_id {
        if state.repository::<College>(college::TABLE).exists(college_id).await? {
            links.college_id = Some(college_id);
        }
    }
    if let Some(organizer_id) = input.organizer_id {
        if state.repository::<Profile>(profile::TABLE).exists(organizer_id).await? {
            links.organizer_id = Some(organizer_id);
        }
    }

    let row = event::update(&state.db, id, &input, links)
        .await?
        .ok_or_else(|| not_found("Event", id))?;
    Ok(Json(row))
}

/// DELETE /api/events/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<StatusCode> {
    let removed = state.repository::<Event>(event::TABLE).delete_by_id(id).await?;
    deleted(removed, "Event", id)
}

fn require_link(id: Option<Uuid>, relation: &str) -> ApiResult<Uuid> {
    id.ok_or_else(|| ApiError::bad_request(format!("{} is required", relation)))
}

fn ensure_exists(found: bool, relation: &str) -> ApiResult<()> {
    if found {
        Ok(())
    } else {
        Err(ApiError::bad_request(format!("{} not found", relation)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_relation_names_it() {
        let err = require_link(None, "Category").unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Category is required");
    }

    #[test]
    fn unknown_relation_names_it() {
        let err = ensure_exists(false, "Organizer").unwrap_err();
        assert_eq!(err.message(), "Organizer not found");
        assert!(ensure_exists(true, "Organizer").is_ok());
    }
}
