//! Cache configuration module

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Which store backs the code cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    /// Redis server with native per-key expiry
    Redis,
    /// In-process map, for development and tests
    Memory,
}

/// Code cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Backend used for the code cache
    #[serde(default = "default_backend")]
    pub backend: CacheBackend,

    /// Redis connection URL
    pub url: String,

    /// Redis password, injected into the URL when the URL carries none
    #[serde(default)]
    pub password: Option<String>,

    /// Redis database number (0-15)
    #[serde(default)]
    pub database: u8,

    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,

    /// Maximum attempts for connecting and for transient operation failures
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Base delay between retries (exponential backoff)
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            url: String::from("redis://localhost:6379"),
            password: None,
            database: 0,
            connection_timeout: default_connection_timeout(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl CacheConfig {
    /// Create a new Redis cache configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// In-memory cache configuration
    pub fn memory() -> Self {
        Self {
            backend: CacheBackend::Memory,
            ..Default::default()
        }
    }

    /// Set the Redis password
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set the database number
    pub fn with_database(mut self, db: u8) -> Self {
        self.database = db.min(15);
        self
    }

    /// Connection URL with password and database applied
    ///
    /// A password already present in `url` wins over `password`.
    pub fn connection_url(&self) -> String {
        let mut url = self.url.trim_end_matches('/').to_string();

        if let Some(password) = self.password.as_deref().filter(|p| !p.is_empty()) {
            if let Some(proto_end) = url.find("://") {
                let (scheme, rest) = url.split_at(proto_end + 3);
                if !rest.contains('@') {
                    url = format!("{}:{}@{}", scheme, password, rest);
                }
            }
        }

        if self.database > 0 && !has_database_path(&url) {
            url = format!("{}/{}", url, self.database);
        }

        url
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backend == CacheBackend::Redis && !self.url.contains("://") {
            return Err(ConfigError::invalid("cache.url", "must be a redis:// or rediss:// URL"));
        }
        if self.database > 15 {
            return Err(ConfigError::invalid("cache.database", "must be between 0 and 15"));
        }
        if self.max_retries == 0 {
            return Err(ConfigError::invalid("cache.max_retries", "must be at least 1"));
        }
        Ok(())
    }
}

fn has_database_path(url: &str) -> bool {
    url.find("://")
        .map(|proto_end| url[proto_end + 3..].contains('/'))
        .unwrap_or(false)
}

fn default_backend() -> CacheBackend {
    CacheBackend::Redis
}

fn default_connection_timeout() -> u64 {
    5
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    100
}
