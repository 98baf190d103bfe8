use async_trait::async_trait;
use reqwest::{header::AUTHORIZATION, Client};
use serde_json::json;
use std::time::Duration;
use tracing::debug;

use super::gateway::{GatewayError, PaymentGateway, UpstreamResponse};
use crate::config::UpstreamConfig;
use crate::models::PaymentOperation;

/// `reqwest` gateway to the Pi Network platform API
#[derive(Debug, Clone)]
pub struct PiNetworkClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl PiNetworkClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, GatewayError> {
        let timeout = Duration::from_secs(config.timeout_seconds);
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            timeout,
        })
    }

    pub fn operation_url(&self, operation: PaymentOperation) -> String {
        format!("{}/payments/{}", self.base_url, operation.as_str())
    }

    fn map_error(&self, err: reqwest::Error) -> GatewayError {
        if err.is_timeout() {
            GatewayError::Timeout(self.timeout)
        } else {
            GatewayError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl PaymentGateway for PiNetworkClient {
    async fn send(
        &self,
        operation: PaymentOperation,
        payment_id: &str,
    ) -> Result<UpstreamResponse, GatewayError> {
        let url = self.operation_url(operation);
        debug!(%url, payment_id, "Sending payment operation upstream");

        let mut request = self
            .client
            .post(&url)
            .json(&json!({ "paymentId": payment_id }));
        if let Some(api_key) = &self.api_key {
            request = request.header(AUTHORIZATION, format!("Key {}", api_key));
        }

        let response = request.send().await.map_err(|e| self.map_error(e))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.map_error(e))?;

        Ok(UpstreamResponse { status, body })
    }
}
