use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::database::DatabaseError;

pub const TABLE: &str = "team_members";

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: Uuid,
    pub team_id: Uuid,
    pub member_name: String,
    pub member_email: Option<String>,
    pub member_phone: Option<String>,
    pub university_registration_number: Option<String>,
    pub is_leader: bool,
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberInput {
    pub team_id: Uuid,
    pub member_name: String,
    pub member_email: Option<String>,
    pub member_phone: Option<String>,
    pub university_registration_number: Option<String>,
    #[serde(default)]
    pub is_leader: bool,
    pub joined_at: Option<DateTime<Utc>>,
}

pub async fn insert(pool: &PgPool, input: &TeamMemberInput) -> Result<TeamMember, DatabaseError> {
    let row = sqlx::query_as::<_, TeamMember>(
        "INSERT INTO team_members (id, team_id, member_name, member_email, member_phone, \
         university_registration_number, is_leader, joined_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, NOW())) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(input.team_id)
    .bind(&input.member_name)
    .bind(&input.member_email)
    .bind(&input.member_phone)
    .bind(&input.university_registration_number)
    .bind(input.is_leader)
    .bind(input.joined_at)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    input: &TeamMemberInput,
) -> Result<Option<TeamMember>, DatabaseError> {
    let row = sqlx::query_as::<_, TeamMember>(
        "UPDATE team_members SET team_id = $2, member_name = $3, member_email = $4, \
         member_phone = $5, university_registration_number = $6, is_leader = $7, \
         joined_at = COALESCE($8, joined_at) WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(input.team_id)
    .bind(&input.member_name)
    .bind(&input.member_email)
    .bind(&input.member_phone)
    .bind(&input.university_registration_number)
    .bind(input.is_leader)
    .bind(input.joined_at)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}
