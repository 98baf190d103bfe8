use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::ApiResponse;
use thiserror::Error;

use crate::upstream::GatewayError;

/// Every way a relay request can end without upstream data.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("paymentId is required")]
    MissingPaymentId,

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Upstream answered with a non-success status; `body` is its raw text.
    #[error("{body}")]
    UpstreamRejected { status: u16, body: String },

    #[error("{0}")]
    Transport(String),
}

impl RelayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MissingPaymentId => StatusCode::BAD_REQUEST,
            RelayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RelayError::UpstreamRejected { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            RelayError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<GatewayError> for RelayError {
    fn from(err: GatewayError) -> Self {
        RelayError::Transport(err.to_string())
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ApiResponse::error(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_status_codes() {
        assert_eq!(RelayError::MissingPaymentId.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(RelayError::MethodNotAllowed.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            RelayError::Transport("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            RelayError::UpstreamRejected { status: 404, body: "not found".to_string() }.status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_unrepresentable_upstream_status_maps_to_bad_gateway() {
        let err = RelayError::UpstreamRejected { status: 42, body: String::new() };
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_rejection_message_is_raw_body() {
        let err = RelayError::UpstreamRejected {
            status: 400,
            body: r#"{"error":"already_approved"}"#.to_string(),
        };
        assert_eq!(err.to_string(), r#"{"error":"already_approved"}"#);
    }

    #[test]
    fn test_gateway_errors_become_transport_failures() {
        let err: RelayError = GatewayError::Timeout(Duration::from_secs(30)).into();
        assert!(matches!(err, RelayError::Transport(ref msg) if msg.contains("timed out")));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
