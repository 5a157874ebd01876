//! Redis-backed code cache

use async_trait::async_trait;
use redis::RedisError;
use tracing::warn;

use vs_core::errors::TransportFault;
use vs_core::services::CodeCacheTrait;

use super::redis_client::RedisClient;
use crate::InfrastructureError;

/// Code cache storing each code as a Redis string with native expiry
#[derive(Clone)]
pub struct RedisCodeCache {
    client: RedisClient,
}

impl RedisCodeCache {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CodeCacheTrait for RedisCodeCache {
    async fn get(&self, key: &str) -> Result<Option<String>, TransportFault> {
        self.client.get(key).await.map_err(to_fault)
    }

    /// A write lost to a dropped or unreachable connection is reported as
    /// "not persisted"; any other Redis error is a fault.
    async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        ttl_seconds: u64,
    ) -> Result<bool, TransportFault> {
        match self.client.set_with_expiry(key, value, ttl_seconds).await {
            Ok(()) => Ok(true),
            Err(InfrastructureError::Cache(e)) if is_unreachable(&e) => {
                warn!(error = %e, "Redis unreachable, code not persisted");
                Ok(false)
            }
            Err(e) => Err(to_fault(e)),
        }
    }
}

/// Whether a failed write never reached Redis or its outcome was lost
pub(crate) fn is_unreachable(error: &RedisError) -> bool {
    error.is_io_error() || error.is_connection_dropped() || error.is_timeout()
}

/// Classify an infrastructure error as a transport fault
pub(crate) fn to_fault(error: InfrastructureError) -> TransportFault {
    match error {
        InfrastructureError::Cache(e) if e.is_timeout() => TransportFault::Timeout(e.to_string()),
        InfrastructureError::Cache(e) if e.is_io_error() || e.is_connection_dropped() => {
            TransportFault::Connection(e.to_string())
        }
        InfrastructureError::Cache(e) => TransportFault::Other(e.to_string()),
        InfrastructureError::Http(e) if e.is_timeout() => TransportFault::Timeout(e.to_string()),
        InfrastructureError::Http(e) if e.is_connect() => TransportFault::Connection(e.to_string()),
        other => TransportFault::Other(other.to_string()),
    }
}
