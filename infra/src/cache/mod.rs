//! Cache module for verification code storage
//!
//! Provides the Redis client with connection and operation retry, the
//! Redis-backed code cache, and an in-memory cache for development.

pub mod code_cache;
pub mod memory_cache;
pub mod redis_client;


use std::sync::Arc;

use tracing::info;
use vs_core::services::CodeCacheTrait;
use vs_shared::{CacheBackend, CacheConfig};

use crate::InfrastructureError;

pub use code_cache::RedisCodeCache;
pub use memory_cache::MemoryCodeCache;
pub use redis_client::RedisClient;

/// Create the code cache selected by configuration
///
/// Returns the cache together with the Redis client backing it, if any, so
/// callers can run health checks against the same connection.
pub async fn create_code_cache(
    config: &CacheConfig,
) -> Result<(Arc<dyn CodeCacheTrait>, Option<RedisClient>), InfrastructureError> {
    config.validate()?;

    match config.backend {
        CacheBackend::Memory => {
            info!("Using in-memory code cache");
            Ok((Arc::new(MemoryCodeCache::new()), None))
        }
        CacheBackend::Redis => {
            let client = RedisClient::new(config).await?;
            Ok((Arc::new(RedisCodeCache::new(client.clone())), Some(client)))
        }
    }
}
