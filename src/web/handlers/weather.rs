//! Weather page handler.

use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::info;

use super::index::IndexTemplate;
use crate::error::LookupError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub city: Option<String>,
}

/// Renders current weather for the requested city.
///
/// # Endpoint
///
/// `GET /weather?city=<name>`
///
/// # Errors
///
/// Any [`LookupError`], including a missing or empty `city` parameter,
/// becomes a `302 Found` redirect to `/`.
pub async fn weather_handler(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<IndexTemplate, LookupError> {
    let city = query.city.unwrap_or_default();
    info!(city = %city, "Weather requested");

    let record = state.weather_service.lookup(&city).await?;

    Ok(IndexTemplate {
        weather: Some(record.into()),
    })
}
