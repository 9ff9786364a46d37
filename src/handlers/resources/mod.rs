// handlers/resources/mod.rs - CRUD handlers for the Festify tables
//
// Every resource exposes list/get/create/update/delete; the finders that the
// frontend uses live next to them in the same file.

pub mod categories;
pub mod colleges;
pub mod events;
pub mod payments;
pub mod profiles;
pub mod registrations;
pub mod reviews;
pub mod team_members;
pub mod teams;
pub mod tickets;

use axum::http::StatusCode;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};

pub(crate) fn not_found(resource: &str, id: Uuid) -> ApiError {
    ApiError::not_found(format!("{} {} not found", resource, id))
}

/// 204 when a row was removed, 404 otherwise.
pub(crate) fn deleted(removed: bool, resource: &str, id: Uuid) -> ApiResult<StatusCode> {
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(resource, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_outcome_maps_to_status() {
        let id = Uuid::new_v4();
        assert_eq!(deleted(true, "Event", id).unwrap(), StatusCode::NO_CONTENT);

        let err = deleted(false, "Event", id).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), format!("Event {} not found", id));
    }
}
