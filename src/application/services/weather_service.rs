//! Cache-aside weather lookup service.

use std::sync::Arc;

use crate::domain::entities::WeatherRecord;
use crate::domain::providers::WeatherProvider;
use crate::error::LookupError;
use crate::infrastructure::cache::CacheService;
use tracing::{debug, info, warn};

/// Lifetime of a cached weather record.
pub const DEFAULT_TTL_SECONDS: u64 = 30;

/// Looks up current weather, consulting the cache before the provider.
///
/// The cache is keyed by the city name exactly as given. A record fetched
/// from the provider is written back with a fixed TTL; concurrent misses for
/// the same city each call the provider and the last write wins.
pub struct WeatherService {
    cache: Arc<dyn CacheService>,
    provider: Arc<dyn WeatherProvider>,
    ttl_seconds: u64,
}

impl WeatherService {
    /// Creates a new weather service.
    pub fn new(
        cache: Arc<dyn CacheService>,
        provider: Arc<dyn WeatherProvider>,
        ttl_seconds: u64,
    ) -> Self {
        Self {
            cache,
            provider,
            ttl_seconds,
        }
    }

    /// Returns current weather for `city_name`.
    ///
    /// # Request Flow
    ///
    /// 1. Reject an empty city name
    /// 2. Return the cached record if present and decodable
    /// 3. Otherwise fetch from the provider
    /// 4. Write the fetched record back to the cache (best-effort)
    ///
    /// A cache miss, a cache outage and an undecodable cache entry all fall
    /// through to step 3.
    ///
    /// # Errors
    ///
    /// - [`LookupError::NoCity`] if `city_name` is empty
    /// - [`LookupError::ProviderUnreachable`] on transport failure
    /// - [`LookupError::CityNotFound`] if the provider rejects the city
    /// - [`LookupError::DecodeFailed`] if the provider response is malformed
    pub async fn lookup(&self, city_name: &str) -> Result<WeatherRecord, LookupError> {
        if city_name.is_empty() {
            warn!("{}", LookupError::NoCity);
            return Err(LookupError::NoCity);
        }

        if let Some(record) = self.cached(city_name).await {
            return Ok(record);
        }

        let record = self
            .provider
            .fetch_by_city(city_name)
            .await
            .map_err(LookupError::from)
            .inspect_err(|e| warn!(city = city_name, "Provider lookup failed: {}", e))?;

        info!(city = city_name, resolved = %record.city_name, "Fetched weather from provider");

        self.store(city_name, &record).await;

        Ok(record)
    }

    /// Reads and decodes the cached record, if any.
    async fn cached(&self, city_name: &str) -> Option<WeatherRecord> {
        match self.cache.get(city_name).await {
            Ok(Some(value)) => match WeatherRecord::from_cache_value(&value) {
                Ok(record) => {
                    debug!("Cache HIT for {}", city_name);
                    Some(record)
                }
                Err(e) => {
                    let err = LookupError::DecodeFailed(e.to_string());
                    warn!("Ignoring cached entry for {}: {}", city_name, err);
                    None
                }
            },
            Ok(None) => {
                debug!("Cache MISS for {}", city_name);
                None
            }
            Err(e) => {
                warn!(
                    "Cache error for {}: {}. Falling back to provider",
                    city_name, e
                );
                None
            }
        }
    }

    /// Writes a record to the cache. Failures are logged and dropped.
    async fn store(&self, city_name: &str, record: &WeatherRecord) {
        let value = match record.to_cache_value() {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to encode weather for {}: {}", city_name, e);
                return;
            }
        };

        match self.cache.set(city_name, &value, self.ttl_seconds).await {
            Ok(()) => debug!(
                "Cache SET: {} (TTL: {}s, backend: {})",
                city_name,
                self.ttl_seconds,
                self.cache.backend()
            ),
            Err(e) => warn!("Failed to cache weather for {}: {}", city_name, e),
        }
    }
}
