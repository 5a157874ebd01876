//! Traits for code cache and notifier integration

use async_trait::async_trait;

use crate::errors::TransportFault;

/// Key-value store holding live codes
#[async_trait]
pub trait CodeCacheTrait: Send + Sync {
    /// Read the value under `key`, `None` when absent or expired
    async fn get(&self, key: &str) -> Result<Option<String>, TransportFault>;

    /// Store `value` under `key`, expiring after `ttl_seconds`
    ///
    /// `Ok(false)` means the store declined to persist the value.
    async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        ttl_seconds: u64,
    ) -> Result<bool, TransportFault>;
}

/// Outbound message channel delivering codes to users
#[async_trait]
pub trait NotifierTrait: Send + Sync {
    /// Deliver a message, `Ok(false)` when the channel refused it
    async fn send(&self, destination: &str, subject: &str, body: &str) -> Result<bool, TransportFault>;
}
