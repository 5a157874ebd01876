//! Application state and factory
//!
//! This module holds the shared application state and provides the factory
//! for creating the Actix-web application.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error, HttpResponse,
};
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

use vs_core::services::{CodeCacheTrait, IssuanceService, NotifierTrait};
use vs_infra::RedisClient;

use crate::routes::{health::health_check, issuance};

/// Issuance service wired to runtime-selected collaborators
pub type DynIssuanceService = IssuanceService<dyn CodeCacheTrait, dyn NotifierTrait>;

/// Application state shared by all workers
pub struct AppState {
    /// Issuance service handling RPC calls
    pub service: Arc<DynIssuanceService>,
    /// Redis connection probed by the health check, `None` for the in-memory cache
    pub redis: Option<RedisClient>,
}

impl AppState {
    pub fn new(service: Arc<DynIssuanceService>, redis: Option<RedisClient>) -> Self {
        Self { service, redis }
    }
}

/// Create and configure the application
pub fn create_app(
    app_state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(app_state)
        .app_data(issuance::json_config())
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/rpc").route(
                "/IssueVerificationCode",
                web::post().to(issuance::issue_verification_code),
            ),
        )
        .default_service(web::route().to(not_found))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
