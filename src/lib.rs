//! # City Weather
//!
//! A small web page showing current weather for a city, backed by
//! OpenWeatherMap and a short-lived Redis cache. Built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Weather record entity and provider trait
//! - **Application Layer** ([`application`]) - Cache-aside lookup service
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis/in-memory cache, OpenWeatherMap client
//! - **API Layer** ([`api`]) - Health endpoint and request tracing
//! - **Web Layer** ([`web`]) - HTML pages rendered with Askama
//!
//! ## Request Flow
//!
//! `GET /weather?city=London` checks the cache for `London`. A hit is
//! rendered directly. A miss queries OpenWeatherMap, stores the result for
//! `CACHE_TTL_SECONDS` (default 30) and renders it. Any failure redirects
//! to `/`.
//!
//! ## Quick Start
//!
//! ```bash
//! export API_KEY="your-openweathermap-key"
//! export REDIS_URL="redis://localhost:6379"  # Optional
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::LookupError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::WeatherService;
    pub use crate::domain::entities::WeatherRecord;
    pub use crate::domain::providers::{ProviderError, WeatherProvider};
    pub use crate::error::LookupError;
    pub use crate::infrastructure::cache::{CacheService, MemoryCache};
    pub use crate::state::AppState;
}
