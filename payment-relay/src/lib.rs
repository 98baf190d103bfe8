//! Payment relay: forwards payment approval and completion calls to the
//! Pi Network platform API and maps the upstream answer back to the caller.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod upstream;

use std::sync::Arc;

use crate::services::RelayService;
use crate::upstream::PaymentGateway;

pub use routes::build_router;

#[derive(Clone)]
pub struct AppState {
    pub relay: RelayService,
}

impl AppState {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self {
            relay: RelayService::new(gateway),
        }
    }
}
