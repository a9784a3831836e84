//! Top-level router configuration combining page and API routes.
//!
//! # Route Structure
//!
//! - `GET  /`             - Landing page
//! - `GET  /weather`      - Weather page for `?city=<name>`
//! - `GET  /health`       - Cache health check
//! - `GET  /static/*`     - Static assets
//! - `GET  /favicon.ico`  - Site icon
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use std::path::Path;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory holding `css/` and `favicon.ico`
pub fn app_router(state: AppState, static_dir: impl AsRef<Path>) -> NormalizePath<Router> {
    let static_dir = static_dir.as_ref();

    let router = Router::new()
        .merge(web::routes::public_routes())
        .merge(api::routes::public_routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .route_service("/favicon.ico", ServeFile::new(static_dir.join("favicon.ico")))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
