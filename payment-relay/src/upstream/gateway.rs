use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use crate::models::PaymentOperation;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Upstream request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Upstream request failed: {0}")]
    Transport(String),

    #[error("Upstream client setup failed: {0}")]
    Client(String),
}

/// Raw upstream answer, before the relay interprets it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Outbound capability: send one payment operation upstream, get status + body back.
///
/// A non-success status is still `Ok`; `Err` means no answer was obtained.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn send(
        &self,
        operation: PaymentOperation,
        payment_id: &str,
    ) -> Result<UpstreamResponse, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        let response = |status| UpstreamResponse { status, body: String::new() };
        assert!(response(200).is_success());
        assert!(response(201).is_success());
        assert!(!response(199).is_success());
        assert!(!response(302).is_success());
        assert!(!response(404).is_success());
    }
}
