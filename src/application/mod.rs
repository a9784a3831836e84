//! Application layer services implementing business logic.
//!
//! Services consume the cache and provider traits and give HTTP handlers a
//! single entry point per use case.
//!
//! # Available Services
//!
//! - [`services::weather_service::WeatherService`] - Cache-aside weather lookup

pub mod services;
