use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::database::DatabaseError;

pub const TABLE: &str = "teams";

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: Uuid,
    pub event_id: Uuid,
    pub team_leader_id: Option<Uuid>,
    pub registration_id: Uuid,
    pub team_name: String,
    pub team_leader_name: String,
    pub team_leader_phone: Option<String>,
    pub team_leader_email: Option<String>,
    pub team_leader_university_reg: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamInput {
    pub event_id: Uuid,
    pub team_leader_id: Option<Uuid>,
    pub registration_id: Uuid,
    pub team_name: String,
    pub team_leader_name: String,
    pub team_leader_phone: Option<String>,
    pub team_leader_email: Option<String>,
    pub team_leader_university_reg: Option<String>,
}

pub async fn insert(pool: &PgPool, input: &TeamInput) -> Result<Team, DatabaseError> {
    let row = sqlx::query_as::<_, Team>(
        "INSERT INTO teams (id, event_id, team_leader_id, registration_id, team_name, \
         team_leader_name, team_leader_phone, team_leader_email, team_leader_university_reg, \
         created_at, updated_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, NOW(), NOW()) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(input.event_id)
    .bind(input.team_leader_id)
    .bind(input.registration_id)
    .bind(&input.team_name)
    .bind(&input.team_leader_name)
    .bind(&input.team_leader_phone)
    .bind(&input.team_leader_email)
    .bind(&input.team_leader_university_reg)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn update(pool: &PgPool, id: Uuid, input: &TeamInput) -> Result<Option<Team>, DatabaseError> {
    let row = sqlx::query_as::<_, Team>(
        "UPDATE teams SET event_id = $2, team_leader_id = $3, registration_id = $4, team_name = $5, \
         team_leader_name = $6, team_leader_phone = $7, team_leader_email = $8, \
         team_leader_university_reg = $9, updated_at = NOW() WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(input.event_id)
    .bind(input.team_leader_id)
    .bind(input.registration_id)
    .bind(&input.team_name)
    .bind(&input.team_leader_name)
    .bind(&input.team_leader_phone)
    .bind(&input.team_leader_email)
    .bind(&input.team_leader_university_reg)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}
