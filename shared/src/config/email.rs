//! Email notifier configuration

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Email delivery provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    /// Write messages to the log instead of delivering them
    Log,
    /// Deliver through an HTTP mail relay API
    Http,
}

/// Email notifier configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Delivery provider
    #[serde(default = "default_provider")]
    pub provider: EmailProvider,

    /// Sender address
    #[serde(default = "default_from")]
    pub from: String,

    /// Mail account user (basic auth against the relay)
    #[serde(default)]
    pub user: String,

    /// Mail account password or API key
    #[serde(default)]
    pub password: String,

    /// Relay endpoint accepting `{from, to, subject, text}` JSON
    #[serde(default)]
    pub api_url: String,

    /// Timeout for a single relay request in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Maximum delivery attempts per message
    ///
    /// Only connect failures and `429` answers are retried; the default of 1
    /// makes every send a single attempt.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Initial retry delay in milliseconds
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            from: default_from(),
            user: String::new(),
            password: String::new(),
            api_url: String::new(),
            request_timeout_secs: default_request_timeout_secs(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl EmailConfig {
    /// HTTP relay configuration
    pub fn http(api_url: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            provider: EmailProvider::Http,
            api_url: api_url.into(),
            from: from.into(),
            ..Default::default()
        }
    }

    /// Set relay credentials
    pub fn with_credentials(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.user = user.into();
        self.password = password.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.from.contains('@') {
            return Err(ConfigError::invalid("email.from", "must be an email address"));
        }
        if self.provider == EmailProvider::Http {
            if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
                return Err(ConfigError::invalid("email.api_url", "must be an http(s) URL"));
            }
            if self.max_retries == 0 {
                return Err(ConfigError::invalid("email.max_retries", "must be at least 1"));
            }
        }
        Ok(())
    }
}

fn default_provider() -> EmailProvider {
    EmailProvider::Log
}

fn default_from() -> String {
    String::from("noreply@localhost")
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_max_retries() -> u32 {
    1
}

fn default_retry_delay_ms() -> u64 {
    500
}
