use axum::{extract::State, response::Json};
use serde_json::Value;
use shared::ApiResponse;
use std::sync::Arc;

use crate::error::RelayError;
use crate::models::{PaymentOperation, PaymentRequest};
use crate::AppState;

pub async fn approve_payment(
    State(state): State<Arc<AppState>>,
    payload: PaymentRequest,
) -> Result<Json<ApiResponse<Value>>, RelayError> {
    let data = state
        .relay
        .relay(PaymentOperation::Approve, &payload.payment_id)
        .await?;
    Ok(Json(ApiResponse::success(data)))
}

pub async fn complete_payment(
    State(state): State<Arc<AppState>>,
    payload: PaymentRequest,
) -> Result<Json<ApiResponse<Value>>, RelayError> {
    let data = state
        .relay
        .relay(PaymentOperation::Complete, &payload.payment_id)
        .await?;
    Ok(Json(ApiResponse::success(data)))
}

/// Fallback for non-POST methods on the relay routes
pub async fn method_not_allowed() -> RelayError {
    RelayError::MethodNotAllowed
}
