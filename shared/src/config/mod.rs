//! Configuration module with service-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `cache` - Code cache backend and Redis connection settings
//! - `email` - Notification (email) provider settings
//! - `environment` - Environment detection and logging configuration
//! - `issuance` - Code issuance parameters (prefix, TTL, code length)
//! - `server` - RPC server bind settings
//!
//! Configuration is layered: built-in defaults, then an optional config file,
//! then `VS__`-prefixed environment variables (`VS__ISSUANCE__TTL_SECONDS=300`).

pub mod cache;
pub mod email;
pub mod environment;
pub mod issuance;
pub mod server;

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export commonly used types
pub use cache::{CacheBackend, CacheConfig};
pub use email::{EmailConfig, EmailProvider};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use issuance::{GeneratorKind, IssuanceConfig};
pub use server::ServerConfig;

/// Prefix of environment variables that override configuration values
pub const ENV_PREFIX: &str = "VS";

/// Separator between nested keys in environment variable names
pub const ENV_SEPARATOR: &str = "__";

/// Environment variable naming a config file when none is passed explicitly
pub const CONFIG_PATH_VAR: &str = "VS_CONFIG";

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("Invalid configuration value for '{field}': {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Code cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Issuance parameters
    #[serde(default)]
    pub issuance: IssuanceConfig,

    /// Email notifier configuration
    #[serde(default)]
    pub email: EmailConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            cache: CacheConfig::memory(),
            email: EmailConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Development),
            ..Default::default()
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            cache: CacheConfig::default(),
            email: EmailConfig {
                provider: EmailProvider::Http,
                ..Default::default()
            },
            logging: LoggingConfig::for_environment(Environment::Production),
            ..Default::default()
        }
    }

    /// Defaults for the given environment
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
            Environment::Staging => {
                let mut config = Self::production();
                config.environment = Environment::Staging;
                config.logging = LoggingConfig::for_environment(Environment::Staging);
                config
            }
        }
    }

    /// Load configuration from defaults, an optional file and the environment
    ///
    /// `.env` files are read first so that their variables take part in both
    /// environment detection and the `VS__` overrides.
    ///
    /// # Arguments
    ///
    /// * `path` - Optional config file, else `VS_CONFIG`; the format is picked from its extension
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| env::var(CONFIG_PATH_VAR).ok().map(PathBuf::from));

        let defaults = Self::for_environment(Environment::from_env());
        let mut builder =
            ::config::Config::builder().add_source(::config::Config::try_from(&defaults)?);

        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(true));
        }

        let loaded: AppConfig = builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        loaded.validate()?;
        Ok(loaded)
    }

    /// Check cross-field constraints that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.cache.validate()?;
        self.issuance.validate()?;
        self.email.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
        assert!(AppConfig::development().validate().is_ok());
    }

    #[test]
    fn test_environment_defaults() {
        let dev = AppConfig::for_environment(Environment::Development);
        assert_eq!(dev.cache.backend, CacheBackend::Memory);
        assert_eq!(dev.email.provider, EmailProvider::Log);

        let staging = AppConfig::for_environment(Environment::Staging);
        assert_eq!(staging.environment, Environment::Staging);
        assert_eq!(staging.cache.backend, CacheBackend::Redis);
        assert_eq!(staging.email.provider, EmailProvider::Http);
    }

    #[test]
    fn test_issuance_defaults_match_protocol() {
        let config = AppConfig::default();
        assert_eq!(config.issuance.cache_prefix, "code_");
        assert_eq!(config.issuance.ttl_seconds, 600);
        assert_eq!(config.issuance.code_length, 4);
        assert_eq!(config.server.port, 50051);
    }

    #[test]
    fn test_validate_reports_issuance_errors() {
        let mut config = AppConfig::default();
        config.issuance.ttl_seconds = 0;

        match config.validate() {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "issuance.ttl_seconds"),
            other => panic!("Expected invalid ttl error, got {:?}", other),
        }
    }
}
