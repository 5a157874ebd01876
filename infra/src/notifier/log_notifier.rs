//! Log-only notifier for development

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info};

use vs_core::errors::TransportFault;
use vs_core::services::NotifierTrait;
use vs_shared::mask_identity;

/// Notifier that logs messages instead of delivering them
///
/// The body, and with it the code, is logged at debug level: never use it in
/// production.
pub struct LogNotifier {
    from: String,
    sent: AtomicU64,
}

impl LogNotifier {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            sent: AtomicU64::new(0),
        }
    }

    /// Messages logged so far
    pub fn sent_count(&self) -> u64 {
        self.sent.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl NotifierTrait for LogNotifier {
    async fn send(&self, destination: &str, subject: &str, body: &str) -> Result<bool, TransportFault> {
        let count = self.sent.fetch_add(1, Ordering::Relaxed) + 1;
        info!(
            from = %self.from,
            to = %mask_identity(destination),
            subject = subject,
            count = count,
            "[LOG EMAIL] message not delivered"
        );
        debug!(body = body, "[LOG EMAIL] body");
        Ok(true)
    }
}
