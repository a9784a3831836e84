//! Upstream data provider interfaces.
//!
//! Implementations live in `crate::infrastructure::weather`.

pub mod weather_provider;

pub use weather_provider::{ProviderError, WeatherProvider};

#[cfg(test)]
pub use weather_provider::MockWeatherProvider;
