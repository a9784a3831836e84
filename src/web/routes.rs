//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{index_handler, weather_handler};
use axum::{Router, routing::get};

/// Public page routes.
///
/// # Endpoints
///
/// - `GET /` - Landing page with the city search form
/// - `GET /weather?city=<name>` - Current weather for a city
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/weather", get(weather_handler))
}
