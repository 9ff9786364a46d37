use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::database::DatabaseError;

pub const TABLE: &str = "reviews";

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    pub event_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewInput {
    pub event_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    pub comment: Option<String>,
}

pub async fn insert(pool: &PgPool, input: &ReviewInput) -> Result<Review, DatabaseError> {
    let row = sqlx::query_as::<_, Review>(
        "INSERT INTO reviews (id, event_id, user_id, rating, comment, created_at) \
         VALUES ($1, $2, $3, $4, $5, NOW()) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(input.event_id)
    .bind(input.user_id)
    .bind(input.rating)
    .bind(&input.comment)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

// Reviews carry no updated_at column.
pub async fn update(pool: &PgPool, id: Uuid, input: &ReviewInput) -> Result<Option<Review>, DatabaseError> {
    let row = sqlx::query_as::<_, Review>(
        "UPDATE reviews SET event_id = $2, user_id = $3, rating = $4, comment = $5 \
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(input.event_id)
    .bind(input.user_id)
    .bind(input.rating)
    .bind(&input.comment)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}
