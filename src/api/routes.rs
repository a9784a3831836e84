//! JSON endpoint route configuration.

use crate::api::handlers::health_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Operational routes.
///
/// # Endpoints
///
/// - `GET /health` - Cache connectivity check
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}
