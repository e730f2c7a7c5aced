//! MoneyQuest — HTTP API.
//!
//! Thin plumbing over the engine: request/response shapes, error mapping,
//! and the router. Process bootstrap lives in `main.rs`.

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Builds the application router.
// TODO: Replace CorsLayer::permissive() with restricted origins for production.
#[must_use]
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/adventure", routes::adventure::router())
        .nest("/actuator", routes::actuator::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
