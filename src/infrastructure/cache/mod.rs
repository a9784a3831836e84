//! Caching layer for weather records.
//!
//! Provides a [`CacheService`] trait with two implementations:
//! - [`RedisCache`] - Production Redis-backed cache
//! - [`MemoryCache`] - In-process fallback with the same TTL semantics

mod memory_cache;
mod redis_cache;
mod service;

pub use memory_cache::{DEFAULT_MEMORY_CAPACITY, MemoryCache};
pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheResult, CacheService};

#[cfg(test)]
pub use service::MockCacheService;
