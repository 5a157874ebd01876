//! Health check response

use serde::{Deserialize, Serialize};

/// Health of the code cache
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheHealth {
    pub backend: String,
    pub healthy: bool,
}

impl CacheHealth {
    pub fn new(backend: impl Into<String>, healthy: bool) -> Self {
        Self {
            backend: backend.into(),
            healthy,
        }
    }
}

/// Body of GET /health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `healthy` or `degraded`
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
    pub cache: CacheHealth,
}

impl HealthResponse {
    pub fn new(cache: CacheHealth) -> Self {
        let status = if cache.healthy { "healthy" } else { "degraded" };
        Self {
            status: status.to_string(),
            service: "verify-server".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            cache,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.cache.healthy
    }
}
