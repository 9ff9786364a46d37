// models/event.rs - events table and the upcoming-events query

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::enums::{EventStatus, ParticipationType};
use crate::database::DatabaseError;

pub const TABLE: &str = "events";

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub banner_url: Option<String>,
    pub category_id: Uuid,
    pub college_id: Uuid,
    pub organizer_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub venue: String,
    pub capacity: i32,
    pub price: Decimal,
    pub participation_type: ParticipationType,
    pub status: EventStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request body for create and update. The relation ids are optional here so
/// the handler can answer with a specific message when one is missing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInput {
    pub title: String,
    pub description: Option<String>,
    pub banner_url: Option<String>,
    pub category_id: Option<Uuid>,
    pub college_id: Option<Uuid>,
    pub organizer_id: Option<Uuid>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub venue: String,
    pub capacity: i32,
    pub price: Decimal,
    pub participation_type: ParticipationType,
    pub status: EventStatus,
}

/// Relation ids after the handler has checked that each row exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventLinks {
    pub category_id: Option<Uuid>,
    pub college_id: Option<Uuid>,
    pub organizer_id: Option<Uuid>,
}

pub async fn insert(
    pool: &PgPool,
    input: &EventInput,
    category_id: Uuid,
    college_id: Uuid,
    organizer_id: Uuid,
) -> Result<Event, DatabaseError> {
    let row = sqlx::query_as::<_, Event>(
        "INSERT INTO events (id, title, description, banner_url, category_id, college_id, \
         organizer_id, start_time, end_time, venue, capacity, price, participation_type, status, \
         created_at, updated_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, NOW(), NOW()) \
         RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(&input.title)
    .bind(&input.description)
    .bind(&input.banner_url)
    .bind(category_id)
    .bind(college_id)
    .bind(organizer_id)
    .bind(input.start_time)
    .bind(input.end_time)
    .bind(&input.venue)
    .bind(input.capacity)
    .bind(input.price)
    .bind(input.participation_type)
    .bind(input.status)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Replaces the scalar columns. A relation is only re-linked when `links`
/// carries an id for it; otherwise the stored one is kept.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    input: &EventInput,
    links: EventLinks,
) -> Result<Option<Event>, DatabaseError> {
    let row = sqlx::query_as::<_, Event>(
        "UPDATE events SET title = $2, description = $3, banner_url = $4, \
         category_id = COALESCE($5, category_id), college_id = COALESCE($6, college_id), \
         organizer_id = COALESCE($7, organizer_id), start_time = $8, end_time = $9, venue = $10, \
         capacity = $11, price = $12, participation_type = $13, status = $14, updated_at = NOW() \
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(&input.title)
    .bind(&input.description)
    .bind(&input.banner_url)
    .bind(links.category_id)
    .bind(links.college_id)
    .bind(links.organizer_id)
    .bind(input.start_time)
    .bind(input.end_time)
    .bind(&input.venue)
    .bind(input.capacity)
    .bind(input.price)
    .bind(input.participation_type)
    .bind(input.status)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Published events that have not started yet, soonest first.
pub async fn find_upcoming(pool: &PgPool, now: DateTime<Utc>) -> Result<Vec<Event>, DatabaseError> {
    let rows = sqlx::query_as::<_, Event>(
        "SELECT * FROM events WHERE status = $1 AND start_time > $2 ORDER BY start_time ASC",
    )
    .bind(EventStatus::Published)
    .bind(now)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn input_reads_camel_case_and_upper_case_enums() {
        let input: EventInput = serde_json::from_value(json!({
            "title": "Hackathon",
            "categoryId": "6f1c1f5e-8d4b-4c36-9b0a-2d4f7f0f3a11",
            "startTime": "2026-11-01T09:00:00Z",
            "endTime": "2026-11-01T18:00:00Z",
            "venue": "Main hall",
            "capacity": 120,
            "price": 49.5,
            "participationType": "TEAM",
            "status": "PUBLISHED"
        }))
        .unwrap();

        assert!(input.category_id.is_some());
        assert!(input.college_id.is_none());
        assert_eq!(input.price, Decimal::new(495, 1));
        assert_eq!(input.participation_type, ParticipationType::Team);
    }
}
