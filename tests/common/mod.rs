#![allow(dead_code)]

use async_trait::async_trait;
use city_weather::application::services::{DEFAULT_TTL_SECONDS, WeatherService};
use city_weather::infrastructure::cache::{
    CacheError, CacheResult, CacheService, MemoryCache,
};
use city_weather::infrastructure::weather::OpenWeatherClient;
use city_weather::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-api-key";

/// A cache whose backend is always down.
pub struct UnavailableCache;

#[async_trait]
impl CacheService for UnavailableCache {
    async fn get(&self, _key: &str) -> CacheResult<Option<String>> {
        Err(CacheError::ConnectionError("connection refused".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str, _ttl_seconds: u64) -> CacheResult<()> {
        Err(CacheError::ConnectionError("connection refused".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}

pub fn weather_body(
    name: &str,
    temp: f64,
    feels_like: f64,
    pressure: i32,
    humidity: i32,
    wind: f64,
) -> Value {
    json!({
        "coord": {"lon": 0.0, "lat": 0.0},
        "weather": [{"id": 800, "main": "Clear", "description": "ясно", "icon": "01d"}],
        "main": {
            "temp": temp,
            "feels_like": feels_like,
            "temp_min": temp - 1.0,
            "temp_max": temp + 1.0,
            "pressure": pressure,
            "humidity": humidity
        },
        "wind": {"speed": wind, "deg": 180},
        "name": name,
        "cod": 200
    })
}

pub fn london_body() -> Value {
    weather_body("London", 15.2, 14.0, 1012, 70, 3.5)
}

pub fn not_found_body() -> Value {
    json!({"cod": "404", "message": "city not found"})
}

/// Mounts a provider response for `city`, expecting exactly `calls` requests.
pub async fn mount_city(server: &MockServer, city: &str, status: u16, body: Value, calls: u64) {
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", city))
        .and(query_param("appid", TEST_API_KEY))
        .and(query_param("units", "metric"))
        .and(query_param("mode", "json"))
        .and(query_param("lang", "ru"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(calls)
        .mount(server)
        .await;
}

pub fn create_client(server: &MockServer) -> OpenWeatherClient {
    OpenWeatherClient::new(&server.uri(), TEST_API_KEY.to_string(), "ru".to_string()).unwrap()
}

pub fn create_test_state_with_cache(
    server: &MockServer,
    cache: Arc<dyn CacheService>,
) -> AppState {
    let weather_service = Arc::new(WeatherService::new(
        cache.clone(),
        Arc::new(create_client(server)),
        DEFAULT_TTL_SECONDS,
    ));

    AppState::new(weather_service, cache)
}

pub fn create_test_state(server: &MockServer) -> (AppState, Arc<MemoryCache>) {
    let cache = Arc::new(MemoryCache::default());
    let state = create_test_state_with_cache(server, cache.clone());
    (state, cache)
}
