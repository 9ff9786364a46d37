// handlers/resources/payments.rs - /api/payments

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::{deleted, not_found};
use crate::database::models::payment::{self, Payment, PaymentInput};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// GET /api/payments
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Payment>>> {
    let rows = state.repository::<Payment>(payment::TABLE).find_all().await?;
    Ok(Json(rows))
}

/// GET /api/payments/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Json<Payment>> {
    let row = state
        .repository::<Payment>(payment::TABLE)
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found("Payment", id))?;
    Ok(Json(row))
}

/// GET /api/payments/registration/:registration_id
pub async fn by_registration(
    State(state): State<AppState>,
    Path(registration_id): Path<Uuid>,
) -> ApiResult<Json<Vec<Payment>>> {
    let rows = state
        .repository::<Payment>(payment::TABLE)
        .find_by("registration_id", registration_id)
        .await?;
    Ok(Json(rows))
}

/// GET /api/payments/transaction/:transaction_id - Lookup by gateway transaction id
pub async fn by_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<String>,
) -> ApiResult<Json<Payment>> {
    let row = state
        .repository::<Payment>(payment::TABLE)
        .find_one_by("transaction_id", transaction_id.clone())
        .await?
        .ok_or_else(|| {
            ApiError::not_found(format!("Payment with transaction {} not found", transaction_id))
        })?;
    Ok(Json(row))
}

/// POST /api/payments
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<PaymentInput>,
) -> ApiResult<(StatusCode, Json<Payment>)> {
    let row = payment::insert(&state.db, &input).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/payments/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<PaymentInput>,
) -> ApiResult<Json<Payment>> {
    let row = payment::update(&state.db, id, &input)
        .await?
        .ok_or_else(|| not_found("Payment", id))?;
    Ok(Json(row))
}

/// DELETE /api/payments/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<StatusCode> {
    let removed = state.repository::<Payment>(payment::TABLE).delete_by_id(id).await?;
    deleted(removed, "Payment", id)
}
