//! Issuance RPC handler

use actix_web::{error::InternalError, web, HttpResponse};

use vs_core::domain::value_objects::{ErrorCode, IssuanceRequest, IssuanceResponse};

use crate::app::AppState;

/// Handler for POST /rpc/IssueVerificationCode
///
/// Every decoded call is answered with 200 OK; the outcome is carried in
/// `error_code`.
///
/// # Request Body
///
/// ```json
/// { "identity": "user@example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "identity": "user@example.com", "error_code": 0 }
/// ```
pub async fn issue_verification_code(
    state: web::Data<AppState>,
    request: web::Json<IssuanceRequest>,
) -> HttpResponse {
    let response = state.service.handle(request.into_inner()).await;
    HttpResponse::Ok().json(response)
}

/// JSON extractor configuration answering undecodable bodies with a
/// well-formed `InternalError` response
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::warn!(
            error = %err,
            event = "malformed_request",
            "Rejected undecodable issuance request"
        );
        let body = IssuanceResponse::new("", ErrorCode::InternalError);
        InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}
