//! Core domain entities.
//!
//! - [`WeatherRecord`] - Current weather for a city, also the cache payload

pub mod weather;

pub use weather::WeatherRecord;
