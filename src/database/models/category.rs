use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::database::DatabaseError;

pub const TABLE: &str = "categories";

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub icon_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    pub name: String,
    pub description: Option<String>,
    pub icon_name: Option<String>,
}

pub async fn insert(pool: &PgPool, input: &CategoryInput) -> Result<Category, DatabaseError> {
    let row = sqlx::query_as::<_, Category>(
        "INSERT INTO categories (id, name, description, icon_name, created_at, updated_at) \
         VALUES ($1, $2, $3, $4, NOW(), NOW()) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(&input.name)
    .bind(&input.description)
    .bind(&input.icon_name)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn update(pool: &PgPool, id: Uuid, input: &CategoryInput) -> Result<Option<Category>, DatabaseError> {
    let row = sqlx::query_as::<_, Category>(
        "UPDATE categories SET name = $2, description = $3, icon_name = $4, updated_at = NOW() \
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(&input.name)
    .bind(&input.description)
    .bind(&input.icon_name)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}
