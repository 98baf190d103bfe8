use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::error::RelayError;
use crate::models::PaymentOperation;
use crate::upstream::PaymentGateway;

/// Forwards a payment identifier upstream and interprets the answer.
///
/// Exactly one gateway call per `relay`, never retried.
#[derive(Clone)]
pub struct RelayService {
    gateway: Arc<dyn PaymentGateway>,
}

impl RelayService {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn relay(
        &self,
        operation: PaymentOperation,
        payment_id: &str,
    ) -> Result<Value, RelayError> {
        info!(%operation, payment_id, "Forwarding payment to upstream");

        let response = match self.gateway.send(operation, payment_id).await {
            Ok(response) => response,
            Err(e) => {
                error!(%operation, payment_id, error = %e, "Upstream call failed");
                return Err(e.into());
            }
        };

        if !response.is_success() {
            warn!(
                %operation,
                payment_id,
                status = response.status,
                body = %response.body,
                "Upstream rejected payment operation"
            );
            return Err(RelayError::UpstreamRejected {
                status: response.status,
                body: response.body,
            });
        }

        let data: Value = serde_json::from_str(&response.body).map_err(|e| {
            error!(%operation, payment_id, error = %e, "Upstream returned malformed JSON");
            RelayError::Transport(format!("Invalid JSON in upstream response: {}", e))
        })?;

        info!(%operation, payment_id, "Upstream accepted payment operation");
        Ok(data)
    }
}
