//! HTTP mail relay notifier
//!
//! Delivers messages by POSTing JSON to a mail relay API.
//!
//! ## Behavior
//!
//! - `2xx`: delivered
//! - other `4xx`: the relay refused the message, reported as not delivered
//! - `5xx` and timeouts: a fault, never retried since the relay may already
//!   have accepted the message
//! - connect errors and `429`: the message was not accepted, so these are
//!   retried with exponential backoff up to `max_retries` attempts

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use vs_core::errors::TransportFault;
use vs_core::services::NotifierTrait;
use vs_shared::{mask_identity, EmailConfig};

use crate::InfrastructureError;

/// Upper bound for the exponential backoff between attempts
const MAX_BACKOFF: Duration = Duration::from_secs(10);

/// Message payload accepted by the relay
#[derive(Debug, Clone, Serialize)]
pub struct MailMessage<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub subject: &'a str,
    pub text: &'a str,
}

/// Notifier delivering email through an HTTP relay
pub struct HttpMailNotifier {
    client: Client,
    config: EmailConfig,
}

impl HttpMailNotifier {
    /// Create a new relay notifier
    pub fn new(config: EmailConfig) -> Result<Self, InfrastructureError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs.max(1)))
            .build()?;

        info!(
            "HTTP mail notifier initialized with sender: {}",
            mask_identity(&config.from)
        );

        Ok(Self { client, config })
    }

    async fn post_once(&self, message: &MailMessage<'_>) -> Result<StatusCode, reqwest::Error> {
        let mut request = self.client.post(&self.config.api_url).json(message);
        if !self.config.user.is_empty() {
            request = request.basic_auth(&self.config.user, Some(&self.config.password));
        }
        let response = request.send().await?;
        Ok(response.status())
    }

    /// Send, retrying only attempts the relay provably did not accept
    async fn send_with_retry(&self, message: &MailMessage<'_>) -> Result<bool, TransportFault> {
        let max_attempts = self.config.max_retries.max(1);
        let mut attempts = 0;
        let mut delay = Duration::from_millis(self.config.retry_delay_ms);

        loop {
            attempts += 1;
            debug!(
                "Sending email attempt {}/{} to {}",
                attempts,
                max_attempts,
                mask_identity(message.to)
            );

            let fault = match self.post_once(message).await {
                Ok(status) if status.is_success() => {
                    info!("Email sent to {}", mask_identity(message.to));
                    return Ok(true);
                }
                Ok(status @ StatusCode::TOO_MANY_REQUESTS) => {
                    warn!("Mail relay throttled request (attempt {}/{})", attempts, max_attempts);
                    TransportFault::Rejected(format!("relay answered {}", status))
                }
                Ok(status) if status.is_server_error() => {
                    error!("Mail relay failed with {}", status);
                    return Err(TransportFault::Rejected(format!("relay answered {}", status)));
                }
                Ok(status) => {
                    warn!("Mail relay refused message with {}", status);
                    return Ok(false);
                }
                Err(e) if e.is_connect() => {
                    warn!(
                        "Failed to connect to mail relay (attempt {}/{}): {}",
                        attempts, max_attempts, e
                    );
                    TransportFault::Connection(e.to_string())
                }
                Err(e) => {
                    error!("Mail relay request failed: {}", e);
                    return Err(classify(&e));
                }
            };

            if attempts >= max_attempts {
                return Err(fault);
            }

            tokio::time::sleep(delay).await;
            delay = (delay * 2).min(MAX_BACKOFF);
        }
    }
}

fn classify(error: &reqwest::Error) -> TransportFault {
    if error.is_timeout() {
        TransportFault::Timeout(error.to_string())
    } else if error.is_connect() {
        TransportFault::Connection(error.to_string())
    } else {
        TransportFault::Other(error.to_string())
    }
}

#[async_trait]
impl NotifierTrait for HttpMailNotifier {
    async fn send(&self, destination: &str, subject: &str, body: &str) -> Result<bool, TransportFault> {
        let message = MailMessage {
            from: &self.config.from,
            to: destination,
            subject,
            text: body,
        };
        self.send_with_retry(&message).await
    }
}
