//! Notifier Module
//!
//! Outbound delivery of verification codes by email.
//!
//! - **Log notifier**: writes messages to the log, for development
//! - **HTTP mail notifier**: posts messages to a mail relay API with retry
//! - **Security**: recipient addresses are masked in logs

pub mod http_mail;
pub mod log_notifier;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use tracing::info;
use vs_core::services::NotifierTrait;
use vs_shared::{EmailConfig, EmailProvider};

use crate::InfrastructureError;

pub use http_mail::{HttpMailNotifier, MailMessage};
pub use log_notifier::LogNotifier;

/// Create the notifier selected by configuration
pub fn create_notifier(config: &EmailConfig) -> Result<Arc<dyn NotifierTrait>, InfrastructureError> {
    config.validate()?;

    match config.provider {
        EmailProvider::Log => {
            info!("Using log notifier, emails will not be delivered");
            Ok(Arc::new(LogNotifier::new(config.from.clone())))
        }
        EmailProvider::Http => Ok(Arc::new(HttpMailNotifier::new(config.clone())?)),
    }
}
