use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::enums::PaymentStatus;
use crate::database::DatabaseError;

pub const TABLE: &str = "payments";

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: Uuid,
    pub registration_id: Uuid,
    pub ticket_id: Option<Uuid>,
    pub payment_status: PaymentStatus,
    pub amount: Decimal,
    pub payment_method: Option<String>,
    pub transaction_id: Option<String>,
    pub payment_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInput {
    pub registration_id: Uuid,
    pub ticket_id: Option<Uuid>,
    pub payment_status: Option<PaymentStatus>,
    pub amount: Decimal,
    pub payment_method: Option<String>,
    pub transaction_id: Option<String>,
    pub payment_date: Option<DateTime<Utc>>,
}

pub async fn insert(pool: &PgPool, input: &PaymentInput) -> Result<Payment, DatabaseError> {
    let row = sqlx::query_as::<_, Payment>(
        "INSERT INTO payments (id, registration_id, ticket_id, payment_status, amount, \
         payment_method, transaction_id, payment_date, created_at, updated_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW(), NOW()) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(input.registration_id)
    .bind(input.ticket_id)
    .bind(input.payment_status.unwrap_or(PaymentStatus::Pending))
    .bind(input.amount)
    .bind(&input.payment_method)
    .bind(&input.transaction_id)
    .bind(input.payment_date)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn update(pool: &PgPool, id: Uuid, input: &PaymentInput) -> Result<Option<Payment>, DatabaseError> {
    let row = sqlx::query_as::<_, Payment>(
        "UPDATE payments SET registration_id = $2, ticket_id = $3, \
         payment_status = COALESCE($4, payment_status), amount = $5, payment_method = $6, \
         transaction_id = $7, payment_date = $8, updated_at = NOW() WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(input.registration_id)
    .bind(input.ticket_id)
    .bind(input.payment_status)
    .bind(input.amount)
    .bind(&input.payment_method)
    .bind(&input.transaction_id)
    .bind(input.payment_date)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}
