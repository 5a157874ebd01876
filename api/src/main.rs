use actix_web::{web, HttpServer};
use anyhow::Context;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use vs_api::{create_app, telemetry, AppState};
use vs_core::services::IssuanceService;
use vs_infra::{create_code_cache, create_notifier};
use vs_shared::AppConfig;

/// Config file path from the first CLI argument; `load` falls back to `VS_CONFIG`
fn config_path() -> Option<PathBuf> {
    std::env::args().nth(1).map(PathBuf::from)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load(config_path().as_deref()).context("failed to load configuration")?;
    telemetry::init_tracing(&config.logging)?;

    info!(
        environment = %config.environment,
        cache = ?config.cache.backend,
        email = ?config.email.provider,
        "Starting verification server"
    );

    let (cache, redis) = create_code_cache(&config.cache)
        .await
        .context("failed to initialise code cache")?;
    let notifier = create_notifier(&config.email).context("failed to initialise notifier")?;
    let service = IssuanceService::new(cache, notifier, config.issuance.clone())?;

    let state = web::Data::new(AppState::new(Arc::new(service), redis));
    let bind_address = config.server.bind_address();

    let mut server = HttpServer::new(move || create_app(state.clone()))
        .shutdown_timeout(config.server.shutdown_timeout);
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    info!("Listening on {}", bind_address);
    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    info!("Server stopped");
    Ok(())
}
