//! Shared utilities and common types for the verification server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types and the layered configuration loader
//! - Identity masking helpers for log output

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CacheBackend, CacheConfig, ConfigError, EmailConfig, EmailProvider, Environment,
    GeneratorKind, IssuanceConfig, LogFormat, LoggingConfig, ServerConfig,
};
pub use utils::masking::mask_identity;
