use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::enums::TicketType;
use crate::database::DatabaseError;

pub const TABLE: &str = "tickets";

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: Uuid,
    pub event_id: Uuid,
    pub registration_id: Option<Uuid>,
    pub ticket_type: TicketType,
    pub price: Decimal,
    pub ticket_code: String,
    pub is_valid: bool,
    pub issued_at: DateTime<Utc>,
    pub used_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketInput {
    pub event_id: Uuid,
    pub registration_id: Option<Uuid>,
    pub ticket_type: TicketType,
    pub price: Decimal,
    /// Generated when omitted.
    pub ticket_code: Option<String>,
    #[serde(default = "valid_by_default")]
    pub is_valid: bool,
    pub issued_at: Option<DateTime<Utc>>,
    pub used_at: Option<DateTime<Utc>>,
}

fn valid_by_default() -> bool {
    true
}

/// Short upper-case code printed on the ticket.
pub fn generate_ticket_code() -> String {
    let raw = Uuid::new_v4().simple().to_string().to_uppercase();
    format!("TKT-{}", &raw[..12])
}

pub async fn insert(pool: &PgPool, input: &TicketInput) -> Result<Ticket, DatabaseError> {
    let code = input.ticket_code.clone().unwrap_or_else(generate_ticket_code);

    let row = sqlx::query_as::<_, Ticket>(
        "INSERT INTO tickets (id, event_id, registration_id, ticket_type, price, ticket_code, \
         is_valid, issued_at, used_at, created_at, updated_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, NOW()), $9, NOW(), NOW()) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(input.event_id)
    .bind(input.registration_id)
    .bind(input.ticket_type)
    .bind(input.price)
    .bind(code)
    .bind(input.is_valid)
    .bind(input.issued_at)
    .bind(input.used_at)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn update(pool: &PgPool, id: Uuid, input: &TicketInput) -> Result<Option<Ticket>, DatabaseError> {
    let row = sqlx::query_as::<_, Ticket>(
        "UPDATE tickets SET event_id = $2, registration_id = $3, ticket_type = $4, price = $5, \
         ticket_code = COALESCE($6, ticket_code), is_valid = $7, issued_at = COALESCE($8, issued_at), \
         used_at = $9, updated_at = NOW() WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(input.event_id)
    .bind(input.registration_id)
    .bind(input.ticket_type)
    .bind(input.price)
    .bind(&input.ticket_code)
    .bind(input.is_valid)
    .bind(input.issued_at)
    .bind(input.used_at)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}
