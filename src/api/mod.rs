//! API module
//!
//! HTTP API endpoints and middleware.

pub mod middleware;
pub mod routes;

pub use routes::create_router;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::ledger::SharedLedger;

/// Build the full application router around a ledger
pub fn build_router(ledger: SharedLedger) -> Router {
    // ServiceBuilder runs top to bottom: context -> logging -> handler
    let api_router = create_router().layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn(middleware::context_middleware))
            .layer(axum::middleware::from_fn(middleware::logging_middleware)),
    );

    Router::new()
        .route("/health", axum::routing::get(health_check))
        .nest("/api/v1", api_router)
        .layer(TraceLayer::new_for_http())
        .with_state(ledger)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
