use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::Deserialize;

use crate::error::RelayError;

/// Upstream payment operation a relay targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOperation {
    Approve,
    Complete,
}

impl PaymentOperation {
    /// Path segment under `{base}/payments/`
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentOperation::Approve => "approve",
            PaymentOperation::Complete => "complete",
        }
    }
}

impl std::fmt::Display for PaymentOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawPaymentRequest {
    #[serde(rename = "paymentId")]
    payment_id: Option<String>,
}

/// Validated relay request body: `{"paymentId": "<non-empty string>"}`.
///
/// Any body that does not carry a non-empty string `paymentId` is rejected
/// with [`RelayError::MissingPaymentId`] before the handler runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequest {
    pub payment_id: String,
}

impl PaymentRequest {
    pub fn from_body(body: &[u8]) -> Result<Self, RelayError> {
        let raw: RawPaymentRequest = serde_json::from_slice(body).unwrap_or_default();
        match raw.payment_id {
            Some(payment_id) if !payment_id.is_empty() => Ok(Self { payment_id }),
            _ => Err(RelayError::MissingPaymentId),
        }
    }
}

#[async_trait]
impl<S> FromRequest<S> for PaymentRequest
where
    S: Send + Sync,
{
    type Rejection = RelayError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|_| RelayError::MissingPaymentId)?;
        Self::from_body(&body)
    }
}
