use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::database::DatabaseError;

pub const TABLE: &str = "colleges";

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct College {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub website: Option<String>,
    pub established_year: Option<i32>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request body for create and full update.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollegeInput {
    pub name: String,
    pub location: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub website: Option<String>,
    pub established_year: Option<i32>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

pub async fn insert(pool: &PgPool, input: &CollegeInput) -> Result<College, DatabaseError> {
    let row = sqlx::query_as::<_, College>(
        "INSERT INTO colleges (id, name, location, description, logo_url, website, \
         established_year, contact_email, contact_phone, created_at, updated_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, NOW(), NOW()) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(&input.name)
    .bind(&input.location)
    .bind(&input.description)
    .bind(&input.logo_url)
    .bind(&input.website)
    .bind(input.established_year)
    .bind(&input.contact_email)
    .bind(&input.contact_phone)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn update(pool: &PgPool, id: Uuid, input: &CollegeInput) -> Result<Option<College>, DatabaseError> {
    let row = sqlx::query_as::<_, College>(
        "UPDATE colleges SET name = $2, location = $3, description = $4, logo_url = $5, \
         website = $6, established_year = $7, contact_email = $8, contact_phone = $9, \
         updated_at = NOW() WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(&input.name)
    .bind(&input.location)
    .bind(&input.description)
    .bind(&input.logo_url)
    .bind(&input.website)
    .bind(input.established_year)
    .bind(&input.contact_email)
    .bind(&input.contact_phone)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}
