use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use payment_relay::{build_router, config::Config, upstream::PiNetworkClient, AppState};
use shared::observability::{init_logging, LogConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    init_logging(LogConfig::new("payment-relay", config.logging.format))?;
    info!("Starting Payment Relay...");

    let gateway = PiNetworkClient::new(&config.upstream)?;
    info!(
        base_url = %config.upstream.base_url,
        timeout_seconds = config.upstream.timeout_seconds,
        api_key_configured = config.upstream.api_key.is_some(),
        "Upstream client initialized"
    );

    let app = build_router(Arc::new(AppState::new(Arc::new(gateway))));

    let addr = config.bind_address();
    info!("Payment Relay listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
