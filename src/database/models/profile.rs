use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::enums::UserRole;
use crate::database::DatabaseError;

pub const TABLE: &str = "profiles";

/// A user profile. `id` is the Supabase auth user id, which is also the
/// `sub` claim of that user's tokens.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub organization_name: Option<String>,
    pub website: Option<String>,
    pub role: UserRole,
    pub college_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    /// Required on create, ignored on update.
    pub id: Option<Uuid>,
    pub full_name: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub organization_name: Option<String>,
    pub website: Option<String>,
    pub role: Option<UserRole>,
    pub college_id: Option<Uuid>,
}

pub async fn insert(pool: &PgPool, id: Uuid, input: &ProfileInput) -> Result<Profile, DatabaseError> {
    let row = sqlx::query_as::<_, Profile>(
        "INSERT INTO profiles (id, full_name, email, avatar_url, phone, bio, organization_name, \
         website, role, college_id, created_at, updated_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, NOW(), NOW()) RETURNING *",
    )
    .bind(id)
    .bind(&input.full_name)
    .bind(&input.email)
    .bind(&input.avatar_url)
    .bind(&input.phone)
    .bind(&input.bio)
    .bind(&input.organization_name)
    .bind(&input.website)
    .bind(input.role.unwrap_or(UserRole::Attendee))
    .bind(input.college_id)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn update(pool: &PgPool, id: Uuid, input: &ProfileInput) -> Result<Option<Profile>, DatabaseError> {
    let row = sqlx::query_as::<_, Profile>(
        "UPDATE profiles SET full_name = $2, email = $3, avatar_url = $4, phone = $5, bio = $6, \
         organization_name = $7, website = $8, role = COALESCE($9, role), college_id = $10, \
         updated_at = NOW() WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(&input.full_name)
    .bind(&input.email)
    .bind(&input.avatar_url)
    .bind(&input.phone)
    .bind(&input.bio)
    .bind(&input.organization_name)
    .bind(&input.website)
    .bind(input.role)
    .bind(input.college_id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}
