//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborators the issuance service
//! depends on.
//!
//! ## Architecture
//!
//! - **Cache**: Redis-backed and in-memory code caches
//! - **Notifier**: log-only and HTTP mail relay notifiers
//!
//! Both are selected at startup from configuration through
//! [`cache::create_code_cache`] and [`notifier::create_notifier`].

// Re-export core types for convenience
pub use vs_core::errors::*;

/// Cache module - Redis client and code cache implementations
pub mod cache;

/// Notifier module - outbound email delivery
pub mod notifier;

pub use cache::{create_code_cache, MemoryCodeCache, RedisClient, RedisCodeCache};
pub use notifier::{create_notifier, HttpMailNotifier, LogNotifier};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<vs_shared::ConfigError> for InfrastructureError {
    fn from(err: vs_shared::ConfigError) -> Self {
        InfrastructureError::Config(err.to_string())
    }
}
