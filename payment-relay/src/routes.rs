use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers;
use crate::AppState;

/// Build the relay router with every route and middleware layer attached.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route(
            "/approve-payment",
            post(handlers::payment::approve_payment)
                .fallback(handlers::payment::method_not_allowed),
        )
        .route(
            "/complete-payment",
            post(handlers::payment::complete_payment)
                .fallback(handlers::payment::method_not_allowed),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
