//! Lookup errors and their HTTP representation.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::domain::providers::ProviderError;

/// Errors returned by [`crate::application::services::WeatherService::lookup`].
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("No city given")]
    NoCity,

    #[error("Weather provider unreachable: {0}")]
    ProviderUnreachable(String),

    #[error("City not found: {0}")]
    CityNotFound(String),

    #[error("Failed to decode weather data: {0}")]
    DecodeFailed(String),
}

impl From<ProviderError> for LookupError {
    fn from(e: ProviderError) -> Self {
        match e {
            ProviderError::TransportFailure(msg) => Self::ProviderUnreachable(msg),
            ProviderError::DecodeFailed(msg) => Self::DecodeFailed(msg),
            ProviderError::CityNotFound { code, message } => {
                Self::CityNotFound(format!("{} ({})", message, code))
            }
        }
    }
}

/// Every lookup failure is a `302 Found` back to the landing page.
///
/// Logged once, where it is raised in the lookup service.
impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
    }
}
