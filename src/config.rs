//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! `main` loads a local `.env` file first if one exists.
//!
//! ## Required Variables
//!
//! - `API_KEY` - OpenWeatherMap API credential
//!
//! ## Optional Variables
//!
//! - `WEATHER_API_URL` - Provider host (default: `https://api.openweathermap.org`)
//! - `WEATHER_LANG` - Provider response language (default: `ru`)
//! - `REDIS_URL` / `REDIS_HOST` - Redis connection (in-memory cache if unset)
//! - `CACHE_TTL_SECONDS` - Lifetime of cached weather (default: 30)
//! - `MEMORY_CACHE_CAPACITY` - Entry limit of the in-memory cache (default: 10000)
//! - `LISTEN` - Bind address (default: `0.0.0.0:80`)
//! - `STATIC_DIR` - Static asset directory (default: `static`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! Redis can also be configured from components:
//!
//! ```bash
//! export REDIS_HOST="redis"
//! export REDIS_PORT="6379"
//! export REDIS_PASSWORD=""
//! export REDIS_DB="0"
//! ```

use anyhow::{Context, Result};
use std::env;

use crate::application::services::DEFAULT_TTL_SECONDS;
use crate::infrastructure::cache::DEFAULT_MEMORY_CAPACITY;
use crate::infrastructure::weather::DEFAULT_BASE_URL;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenWeatherMap credential sent as `appid`.
    pub api_key: String,
    pub weather_api_url: String,
    pub weather_lang: String,
    pub redis_url: Option<String>,
    /// TTL (seconds) for cached weather records.
    pub cache_ttl_seconds: u64,
    /// Entry limit of the in-memory cache used when Redis is unavailable.
    pub memory_cache_capacity: u64,
    pub listen_addr: String,
    pub static_dir: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `API_KEY` is missing.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("API_KEY").context("API_KEY must be set")?;

        let weather_api_url =
            env::var("WEATHER_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let weather_lang = env::var("WEATHER_LANG").unwrap_or_else(|_| "ru".to_string());

        let redis_url = Self::load_redis_url();

        let cache_ttl_seconds = env::var("CACHE_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TTL_SECONDS);

        let memory_cache_capacity = env::var("MEMORY_CACHE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MEMORY_CAPACITY);

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:80".to_string());
        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            api_key,
            weather_api_url,
            weather_lang,
            redis_url,
            cache_ttl_seconds,
            memory_cache_capacity,
            listen_addr,
            static_dir,
            log_level,
            log_format,
        })
    }

    /// Loads Redis URL with fallback to component-based configuration.
    ///
    /// Priority:
    /// 1. `REDIS_URL` environment variable
    /// 2. Constructed from `REDIS_HOST`, `REDIS_PORT`, `REDIS_PASSWORD`, `REDIS_DB`
    ///
    /// Returns `None` if Redis is not configured.
    fn load_redis_url() -> Option<String> {
        if let Ok(url) = env::var("REDIS_URL") {
            return Some(url);
        }

        let host = env::var("REDIS_HOST").ok()?;
        let port = env::var("REDIS_PORT").unwrap_or_else(|_| "6379".to_string());
        let db = env::var("REDIS_DB").unwrap_or_else(|_| "0".to_string());

        // Empty password means no authentication
        let url = match env::var("REDIS_PASSWORD") {
            Ok(pwd) if !pwd.is_empty() => format!("redis://:{}@{}:{}/{}", pwd, host, port, db),
            _ => format!("redis://{}:{}/{}", host, port, db),
        };

        Some(url)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `api_key` is empty
    /// - `weather_api_url` is not an http(s) URL
    /// - `cache_ttl_seconds` is zero
    /// - `memory_cache_capacity` is zero
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `redis_url` has an unknown scheme
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            anyhow::bail!("API_KEY must not be empty");
        }

        if !self.weather_api_url.starts_with("http://")
            && !self.weather_api_url.starts_with("https://")
        {
            anyhow::bail!(
                "WEATHER_API_URL must start with 'http://' or 'https://', got '{}'",
                self.weather_api_url
            );
        }

        if self.weather_lang.is_empty() {
            anyhow::bail!("WEATHER_LANG must not be empty");
        }

        if self.cache_ttl_seconds == 0 {
            anyhow::bail!("CACHE_TTL_SECONDS must be greater than 0");
        }

        if self.memory_cache_capacity == 0 {
            anyhow::bail!("MEMORY_CACHE_CAPACITY must be greater than 0");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if let Some(ref redis_url) = self.redis_url
            && !redis_url.starts_with("redis://")
            && !redis_url.starts_with("rediss://")
        {
            anyhow::bail!(
                "REDIS_URL must start with 'redis://' or 'rediss://', got '{}'",
                mask_connection_string(redis_url)
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!(
            "  Weather API: {} (lang: {}, key: {})",
            self.weather_api_url,
            self.weather_lang,
            mask_secret(&self.api_key)
        );

        if let Some(ref redis_url) = self.redis_url {
            tracing::info!("  Redis: {} (enabled)", mask_connection_string(redis_url));
        } else {
            tracing::info!(
                "  Redis: disabled (in-memory cache, {} entries)",
                self.memory_cache_capacity
            );
        }

        tracing::info!("  Cache TTL: {}s", self.cache_ttl_seconds);
        tracing::info!("  Static dir: {}", self.static_dir);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks the password in a connection string for logging.
///
/// `redis://:password@host:port/db` → `redis://:***@host:port/db`
fn mask_connection_string(url: &str) -> String {
    if let Some(start) = url.find("://") {
        let rest = &url[start + 3..];

        if let Some(at_pos) = rest.find('@') {
            let credentials = &rest[..at_pos];
            let host_part = &rest[at_pos..];

            if let Some(colon_pos) = credentials.rfind(':') {
                let username = &credentials[..colon_pos];
                return format!("{}://{}:***{}", &url[..start], username, host_part);
            }
        }
    }

    url.to_string()
}

/// Keeps the last four characters of a secret.
fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "***".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("***{}", tail)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            api_key: "0123456789abcdef".to_string(),
            weather_api_url: DEFAULT_BASE_URL.to_string(),
            weather_lang: "ru".to_string(),
            redis_url: None,
            cache_ttl_seconds: 30,
            memory_cache_capacity: 10_000,
            listen_addr: "0.0.0.0:80".to_string(),
            static_dir: "static".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    #[test]
    fn test_mask_connection_string() {
        assert_eq!(
            mask_connection_string("redis://:password@localhost:6379/0"),
            "redis://:***@localhost:6379/0"
        );

        assert_eq!(
            mask_connection_string("redis://localhost:6379/0"),
            "redis://localhost:6379/0"
        );
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("0123456789abcdef"), "***cdef");
        assert_eq!(mask_secret("abc"), "***");
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.api_key = "  ".to_string();
        assert!(config.validate().is_err());
        config.api_key = "key".to_string();

        config.cache_ttl_seconds = 0;
        assert!(config.validate().is_err());
        config.cache_ttl_seconds = 30;

        config.memory_cache_capacity = 0;
        assert!(config.validate().is_err());
        config.memory_cache_capacity = 10_000;

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "80".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "0.0.0.0:80".to_string();

        config.weather_api_url = "ftp://api.openweathermap.org".to_string();
        assert!(config.validate().is_err());
        config.weather_api_url = DEFAULT_BASE_URL.to_string();

        config.redis_url = Some("memcached://localhost".to_string());
        assert!(config.validate().is_err());
        config.redis_url = Some("redis://redis:6379/0".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("API_KEY", "test-key");
            env::remove_var("WEATHER_API_URL");
            env::remove_var("WEATHER_LANG");
            env::remove_var("CACHE_TTL_SECONDS");
            env::remove_var("MEMORY_CACHE_CAPACITY");
            env::remove_var("LISTEN");
            env::remove_var("REDIS_URL");
            env::remove_var("REDIS_HOST");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.weather_api_url, DEFAULT_BASE_URL);
        assert_eq!(config.weather_lang, "ru");
        assert_eq!(config.cache_ttl_seconds, 30);
        assert_eq!(config.memory_cache_capacity, DEFAULT_MEMORY_CAPACITY);
        assert_eq!(config.listen_addr, "0.0.0.0:80");
        assert!(config.redis_url.is_none());

        unsafe {
            env::remove_var("API_KEY");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_requires_api_key() {
        // SAFETY: Tests are run serially
        unsafe {
            env::remove_var("API_KEY");
        }

        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_load_redis_url_from_components() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("REDIS_URL");
            env::set_var("REDIS_HOST", "redis-host");
            env::set_var("REDIS_PORT", "6380");
            env::set_var("REDIS_DB", "1");
        }

        let url = Config::load_redis_url().unwrap();
        assert_eq!(url, "redis://redis-host:6380/1");

        unsafe {
            env::set_var("REDIS_PASSWORD", "secret");
        }
        let url = Config::load_redis_url().unwrap();
        assert_eq!(url, "redis://:secret@redis-host:6380/1");

        unsafe {
            env::set_var("REDIS_PASSWORD", "");
        }
        let url = Config::load_redis_url().unwrap();
        assert_eq!(url, "redis://redis-host:6380/1");

        // Cleanup
        unsafe {
            env::remove_var("REDIS_HOST");
            env::remove_var("REDIS_PORT");
            env::remove_var("REDIS_DB");
            env::remove_var("REDIS_PASSWORD");
        }
    }

    #[test]
    #[serial]
    fn test_redis_url_priority() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("REDIS_URL", "redis://from-url:6379/0");
            env::set_var("REDIS_HOST", "from-components");
        }

        let url = Config::load_redis_url().unwrap();

        assert!(url.contains("from-url"));
        assert!(!url.contains("from-components"));

        unsafe {
            env::remove_var("REDIS_URL");
            env::remove_var("REDIS_HOST");
        }
    }
}
