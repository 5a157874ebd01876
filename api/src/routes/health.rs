//! Health check handler

use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::health::{CacheHealth, HealthResponse};

/// Handler for GET /health
///
/// Returns 503 when the Redis cache does not answer PING.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let cache = match &state.redis {
        None => CacheHealth::new("memory", true),
        Some(client) => match client.health_check().await {
            Ok(healthy) => CacheHealth::new("redis", healthy),
            Err(e) => {
                tracing::warn!(error = %e, "Cache health check failed");
                CacheHealth::new("redis", false)
            }
        },
    };

    let response = HealthResponse::new(cache);
    if response.is_healthy() {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
