//! In-process cache implementation backed by `moka`.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default number of entries held before the least recently used are evicted.
pub const DEFAULT_MEMORY_CAPACITY: u64 = 10_000;

#[derive(Clone)]
struct Entry {
    value: String,
    ttl: Duration,
}

/// Expires every entry after the TTL it was written with.
struct EntryTtl;

impl Expiry<String, Entry> for EntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        entry: &Entry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        entry: &Entry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }
}

/// A bounded cache held in process memory.
///
/// Used when Redis is not configured or unreachable at startup. Each entry
/// expires after the TTL passed to [`CacheService::set`]; once the entry
/// count reaches the capacity, least recently used entries are evicted.
pub struct MemoryCache {
    cache: Cache<String, Entry>,
}

impl MemoryCache {
    /// Creates an empty cache holding at most `max_capacity` entries.
    pub fn new(max_capacity: u64) -> Self {
        debug!(max_capacity, "Using in-memory cache");

        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(EntryTtl)
            .build();

        Self { cache }
    }

    /// Number of live entries, after pending evictions have run.
    pub async fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }

    pub async fn is_empty(&self) -> bool {
        self.entry_count().await == 0
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new(DEFAULT_MEMORY_CAPACITY)
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        Ok(self.cache.get(key).await.map(|entry| entry.value))
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> CacheResult<()> {
        let entry = Entry {
            value: value.to_string(),
            ttl: Duration::from_secs(ttl_seconds),
        };

        self.cache.insert(key.to_string(), entry).await;
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_missing_key() {
        let cache = MemoryCache::default();

        assert_eq!(cache.get("Berlin").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let cache = MemoryCache::default();
        cache.set("Berlin", "payload", 30).await.unwrap();

        assert_eq!(cache.get("Berlin").await.unwrap().as_deref(), Some("payload"));
    }

    #[tokio::test]
    async fn test_keys_are_case_sensitive() {
        let cache = MemoryCache::default();
        cache.set("Berlin", "payload", 30).await.unwrap();

        assert_eq!(cache.get("berlin").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let cache = MemoryCache::default();
        cache.set("Berlin", "old", 30).await.unwrap();
        cache.set("Berlin", "new", 30).await.unwrap();

        assert_eq!(cache.get("Berlin").await.unwrap().as_deref(), Some("new"));
        assert_eq!(cache.entry_count().await, 1);
    }

    #[tokio::test]
    async fn test_entry_expires_after_ttl() {
        let cache = MemoryCache::default();
        cache.set("Berlin", "payload", 1).await.unwrap();
        assert!(cache.get("Berlin").await.unwrap().is_some());

        tokio::time::sleep(Duration::from_millis(1200)).await;

        assert_eq!(cache.get("Berlin").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_expired_entries_are_evicted() {
        let cache = MemoryCache::default();
        for i in 0..100 {
            cache.set(&format!("city-{i}"), "payload", 1).await.unwrap();
        }
        assert_eq!(cache.entry_count().await, 100);

        tokio::time::sleep(Duration::from_millis(2500)).await;
        cache.set("Berlin", "payload", 30).await.unwrap();

        assert_eq!(cache.entry_count().await, 1);
    }

    #[tokio::test]
    async fn test_capacity_is_bounded() {
        let cache = MemoryCache::new(10);
        for i in 0..200 {
            cache.set(&format!("city-{i}"), "payload", 30).await.unwrap();
        }

        assert!(cache.entry_count().await <= 10);
    }

    #[tokio::test]
    async fn test_health_check() {
        let cache = MemoryCache::default();

        assert!(cache.health_check().await);
        assert_eq!(cache.backend(), "memory");
    }
}
