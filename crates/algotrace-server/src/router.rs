//! Router assembly for the algotrace HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// CORS is permissive since the presentation layer is served elsewhere.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        // Catalog
        .route("/algorithms", get(handlers::algorithms::list_algorithms))
        .route("/algorithms/{slug}", get(handlers::algorithms::get_algorithm))
        .route("/algorithms/{slug}/sample", get(handlers::algorithms::sample))
        // Traces
        .route("/traces", post(handlers::traces::create_trace))
        .route("/traces/{id}", get(handlers::traces::get_trace))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
