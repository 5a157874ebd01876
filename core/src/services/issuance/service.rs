//! Main issuance service implementation

use futures_util::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use vs_shared::{mask_identity, IssuanceConfig};

use crate::domain::entities::VerificationCode;
use crate::domain::value_objects::{ErrorCode, IssuanceRequest, IssuanceResponse};
use crate::errors::{DomainResult, IssuanceError};

use super::generator::{generator_for, CodeGenerator};
use super::traits::{CodeCacheTrait, NotifierTrait};

/// Issuance service deciding between reusing and minting a code
///
/// Stateless between calls: the cache is the only shared state, so the
/// service can be shared across any number of concurrent requests.
pub struct IssuanceService<C: CodeCacheTrait + ?Sized, N: NotifierTrait + ?Sized> {
    /// Store for live codes
    cache: Arc<C>,
    /// Channel delivering codes to users
    notifier: Arc<N>,
    /// Source of fresh codes
    generator: Arc<dyn CodeGenerator>,
    /// Protocol parameters
    config: IssuanceConfig,
}

impl<C: CodeCacheTrait + ?Sized, N: NotifierTrait + ?Sized> IssuanceService<C, N> {
    /// Create a new issuance service
    ///
    /// # Arguments
    ///
    /// * `cache` - Code cache implementation
    /// * `notifier` - Notifier implementation
    /// * `config` - Issuance parameters, validated here
    pub fn new(cache: Arc<C>, notifier: Arc<N>, config: IssuanceConfig) -> DomainResult<Self> {
        config.validate()?;
        let generator = generator_for(&config);

        Ok(Self {
            cache,
            notifier,
            generator,
            config,
        })
    }

    /// Replace the code generator
    pub fn with_generator(mut self, generator: Arc<dyn CodeGenerator>) -> Self {
        self.generator = generator;
        self
    }

    pub fn config(&self) -> &IssuanceConfig {
        &self.config
    }

    /// Handle one RPC request, echoing the identity back unchanged
    pub async fn handle(&self, request: IssuanceRequest) -> IssuanceResponse {
        let error_code = self.issue(&request.identity).await;
        IssuanceResponse::new(request.identity, error_code)
    }

    /// Issue (or re-deliver) a code for `identity`
    ///
    /// Every failure, including a panic inside a collaborator, is contained
    /// here and reported through the returned code.
    pub async fn issue(&self, identity: &str) -> ErrorCode {
        let masked = mask_identity(identity);

        let outcome = match AssertUnwindSafe(self.try_issue(identity)).catch_unwind().await {
            Ok(result) => result,
            Err(payload) => Err(IssuanceError::Panicked(panic_message(payload))),
        };

        match outcome {
            Ok(()) => {
                tracing::info!(
                    identity = %masked,
                    event = "issuance_completed",
                    error_code = ErrorCode::Success.code(),
                    "Verification code delivered"
                );
                ErrorCode::Success
            }
            Err(err) => {
                let code = err.error_code();
                tracing::error!(
                    identity = %masked,
                    event = "issuance_completed",
                    reason = err.reason(),
                    error = %err,
                    error_code = code.code(),
                    "Verification code issuance failed"
                );
                code
            }
        }
    }

    async fn try_issue(&self, identity: &str) -> Result<(), IssuanceError> {
        let key = self.config.cache_key(identity);

        let existing = self
            .cache
            .get(&key)
            .await
            .map_err(IssuanceError::CacheRead)?;

        let code = match existing {
            Some(value) => {
                tracing::debug!(
                    identity = %mask_identity(identity),
                    event = "code_reused",
                    "Live verification code found, re-sending"
                );
                VerificationCode::new(value)
            }
            None => {
                let code = self.generator.generate();
                let persisted = self
                    .cache
                    .set_with_expiry(&key, code.as_str(), self.config.ttl_seconds)
                    .await
                    .map_err(IssuanceError::CacheWrite)?;

                if !persisted {
                    tracing::warn!(
                        identity = %mask_identity(identity),
                        event = "code_persist_failed",
                        "Cache declined to store the new verification code"
                    );
                    return Err(IssuanceError::CachePersistFailed);
                }

                tracing::debug!(
                    identity = %mask_identity(identity),
                    event = "code_generated",
                    ttl_seconds = self.config.ttl_seconds,
                    "Stored new verification code"
                );
                code
            }
        };

        let body = self.compose_body(&code);
        let delivered = self
            .notifier
            .send(identity, &self.config.subject, &body)
            .await
            .map_err(|fault| {
                tracing::warn!(
                    identity = %mask_identity(identity),
                    event = "notify_failed",
                    error = %fault,
                    "Notifier raised a fault"
                );
                IssuanceError::Notify(fault)
            })?;

        if !delivered {
            tracing::warn!(
                identity = %mask_identity(identity),
                event = "notify_failed",
                "Notifier declined the message"
            );
            return Err(IssuanceError::NotificationRejected);
        }

        Ok(())
    }

    /// Message body carrying the code and its validity window
    pub fn compose_body(&self, code: &VerificationCode) -> String {
        let minutes = self.config.validity_minutes();
        let unit = if minutes == 1 { "minute" } else { "minutes" };
        format!(
            "Your verification code is {}. It is valid for {} {}, please complete your registration in time.",
            code, minutes, unit
        )
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
