use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::enums::{PaymentStatus, RegistrationStatus};
use crate::database::DatabaseError;

pub const TABLE: &str = "registrations";

/// One user's registration for an event, individual or as a team leader.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: Uuid,
    pub event_id: Uuid,
    pub user_id: Uuid,
    pub registration_status: RegistrationStatus,
    pub registration_date: DateTime<Utc>,
    pub attended_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub is_team: bool,
    pub team_size: Option<i32>,
    pub team_name: Option<String>,
    pub team_leader_name: Option<String>,
    pub team_leader_phone: Option<String>,
    pub team_leader_email: Option<String>,
    pub team_leader_university_reg: Option<String>,
    pub payment_status: PaymentStatus,
    pub payment_amount: Option<Decimal>,
    pub payment_method: Option<String>,
    pub transaction_id: Option<String>,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Omitted statuses start as `PENDING`; an omitted registration date is now.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInput {
    pub event_id: Uuid,
    pub user_id: Uuid,
    pub registration_status: Option<RegistrationStatus>,
    pub registration_date: Option<DateTime<Utc>>,
    pub attended_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    #[serde(default)]
    pub is_team: bool,
    pub team_size: Option<i32>,
    pub team_name: Option<String>,
    pub team_leader_name: Option<String>,
    pub team_leader_phone: Option<String>,
    pub team_leader_email: Option<String>,
    pub team_leader_university_reg: Option<String>,
    pub payment_status: Option<PaymentStatus>,
    pub payment_amount: Option<Decimal>,
    pub payment_method: Option<String>,
    pub transaction_id: Option<String>,
    pub paid_at: Option<DateTime<Utc>>,
}

impl RegistrationInput {
    fn registration_status(&self) -> RegistrationStatus {
        self.registration_status.unwrap_or(RegistrationStatus::Pending)
    }

    fn payment_status(&self) -> PaymentStatus {
        self.payment_status.unwrap_or(PaymentStatus::Pending)
    }
}

pub async fn insert(pool: &PgPool, input: &RegistrationInput) -> Result<Registration, DatabaseError> {
    let row = sqlx::query_as::<_, Registration>(
        "INSERT INTO registrations (id, event_id, user_id, registration_status, registration_date, \
         attended_at, notes, is_team, team_size, team_name, team_leader_name, team_leader_phone, \
         team_leader_email, team_leader_university_reg, payment_status, payment_amount, \
         payment_method, transaction_id, paid_at, created_at, updated_at) \
         VALUES ($1, $2, $3, $4, COALESCE($5, NOW()), $6, $7, $8, $9, $10, $11, $12, $13, $14, \
         $15, $16, $17, $18, $19, NOW(), NOW()) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(input.event_id)
    .bind(input.user_id)
    .bind(input.registration_status())
    .bind(input.registration_date)
    .bind(input.attended_at)
    .bind(&input.notes)
    .bind(input.is_team)
    .bind(input.team_size)
    .bind(&input.team_name)
    .bind(&input.team_leader_name)
    .bind(&input.team_leader_phone)
    .bind(&input.team_leader_email)
    .bind(&input.team_leader_university_reg)
    .bind(input.payment_status())
    .bind(input.payment_amount)
    .bind(&input.payment_method)
    .bind(&input.transaction_id)
    .bind(input.paid_at)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    input: &RegistrationInput,
) -> Result<Option<Registration>, DatabaseError> {
    let row = sqlx::query_as::<_, Registration>(
        "UPDATE registrations SET event_id = $2, user_id = $3, registration_status = $4, \
         registration_date = COALESCE($5, registration_date), attended_at = $6, notes = $7, \
         is_team = $8, team_size = $9, team_name = $10, team_leader_name = $11, \
         team_leader_phone = $12, team_leader_email = $13, team_leader_university_reg = $14, \
         payment_status = $15, payment_amount = $16, payment_method = $17, transaction_id = $18, \
         paid_at = $19, updated_at = NOW() WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(input.event_id)
    .bind(input.user_id)
    .bind(input.registration_status())
    .bind(input.registration_date)
    .bind(input.attended_at)
    .bind(&input.notes)
    .bind(input.is_team)
    .bind(input.team_size)
    .bind(&input.team_name)
    .bind(&input.team_leader_name)
    .bind(&input.team_leader_phone)
    .bind(&input.team_leader_email)
    .bind(&input.team_leader_university_reg)
    .bind(input.payment_status())
    .bind(input.payment_amount)
    .bind(&input.payment_method)
    .bind(&input.transaction_id)
    .bind(input.paid_at)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}
