//! OpenWeatherMap current-weather client.

use crate::domain::entities::WeatherRecord;
use crate::domain::providers::{ProviderError, WeatherProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

/// Public OpenWeatherMap API host.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

const CURRENT_WEATHER_PATH: &str = "data/2.5/weather";

/// HTTP client for the OpenWeatherMap `data/2.5/weather` endpoint.
///
/// Requests are sent with metric units, JSON mode and a fixed response
/// language. Each lookup is a single GET with the transport's default
/// timeout and no retries.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Client,
    endpoint: Url,
    api_key: String,
    lang: String,
}

impl OpenWeatherClient {
    /// Creates a client for the given API host.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::TransportFailure`] if `base_url` is not a
    /// valid URL or the HTTP client cannot be built.
    pub fn new(base_url: &str, api_key: String, lang: String) -> Result<Self, ProviderError> {
        let endpoint = Url::parse(base_url)
            .and_then(|base| base.join(CURRENT_WEATHER_PATH))
            .map_err(|e| ProviderError::TransportFailure(format!("invalid base URL: {}", e)))?;

        let client = Client::builder()
            .build()
            .map_err(|e| ProviderError::TransportFailure(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            api_key,
            lang,
        })
    }

    /// Builds the request URL for a city lookup.
    fn request_url(&self, city_name: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", city_name)
            .append_pair("appid", &self.api_key)
            .append_pair("units", "metric")
            .append_pair("mode", "json")
            .append_pair("lang", &self.lang);
        url
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn fetch_by_city(&self, city_name: &str) -> Result<WeatherRecord, ProviderError> {
        let response = self
            .client
            .get(self.request_url(city_name))
            .send()
            .await
            .map_err(|e| ProviderError::TransportFailure(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::TransportFailure(e.to_string()))?;

        debug!(city = city_name, %status, body = %body, "OpenWeather response");

        parse_current_weather(&body)
    }
}

/// Body of a `data/2.5/weather` response.
///
/// Success bodies carry a numeric `cod`; error bodies carry it as a string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CurrentWeatherResponse {
    Found(CurrentWeather),
    Failed(ErrorBody),
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    name: String,
    main: MainBlock,
    wind: WindBlock,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    feels_like: f64,
    pressure: i32,
    humidity: i32,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    cod: String,
    #[serde(default)]
    message: String,
}

impl From<CurrentWeather> for WeatherRecord {
    fn from(w: CurrentWeather) -> Self {
        WeatherRecord::new(
            w.name,
            w.main.temp,
            w.main.feels_like,
            w.main.pressure,
            w.main.humidity,
            w.wind.speed,
        )
    }
}

/// Parses a provider response body into a record or a provider error.
fn parse_current_weather(body: &str) -> Result<WeatherRecord, ProviderError> {
    let parsed: CurrentWeatherResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::DecodeFailed(e.to_string()))?;

    match parsed {
        CurrentWeatherResponse::Found(weather) => Ok(weather.into()),
        CurrentWeatherResponse::Failed(ErrorBody { cod, message }) => {
            warn!(code = %cod, message = %message, "OpenWeather rejected request");
            Err(ProviderError::CityNotFound { code: cod, message })
        }
    }
}
