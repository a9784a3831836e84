//! Infrastructure layer for external integrations.
//!
//! Concrete implementations of the interfaces the application layer depends on.
//!
//! # Modules
//!
//! - [`cache`] - Cache backends (Redis and in-process)
//! - [`weather`] - OpenWeatherMap HTTP client

pub mod cache;
pub mod weather;
