//! Provider trait for fetching current weather from an upstream service.

use crate::domain::entities::WeatherRecord;
use async_trait::async_trait;

/// Errors reported by a weather provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The request could not be sent or the body could not be read.
    #[error("Weather provider unreachable: {0}")]
    TransportFailure(String),

    /// The body is not a recognised success or error response.
    #[error("Malformed weather provider response: {0}")]
    DecodeFailed(String),

    /// The provider answered with an error code, e.g. an unknown city.
    #[error("City not found (code {code}): {message}")]
    CityNotFound { code: String, message: String },
}

/// Source of current weather data.
///
/// Implementations must be safe for concurrent use; a single instance is
/// constructed at startup and shared by all requests.
///
/// # Implementations
///
/// - [`crate::infrastructure::weather::OpenWeatherClient`] - OpenWeatherMap HTTP client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetches current weather for a city by name.
    ///
    /// Makes a single attempt. No retries.
    ///
    /// # Errors
    ///
    /// - [`ProviderError::TransportFailure`] if the request fails
    /// - [`ProviderError::DecodeFailed`] if the body cannot be parsed
    /// - [`ProviderError::CityNotFound`] if the provider rejects the city
    async fn fetch_by_city(&self, city_name: &str) -> Result<WeatherRecord, ProviderError>;
}
