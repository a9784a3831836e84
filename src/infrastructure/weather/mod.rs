//! Weather provider implementations.

mod openweather;

pub use openweather::{DEFAULT_BASE_URL, OpenWeatherClient};
