//! Code issuance configuration

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Longest code a generator can produce (32 hex digits of a UUID)
pub const MAX_CODE_LENGTH: usize = 32;

/// Longest lifetime a code may be given (30 days)
pub const MAX_TTL_SECONDS: u64 = 30 * 24 * 60 * 60;

/// Source of fresh verification codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    /// Random UUID truncated to the code length (hex alphabet)
    Uuid,
    /// Random characters from `[A-Za-z0-9]`
    Alphanumeric,
}

/// Parameters of the issuance protocol
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct IssuanceConfig {
    /// Prefix prepended to the identity to form the cache key
    #[serde(default = "default_cache_prefix")]
    pub cache_prefix: String,

    /// Lifetime of a freshly issued code in seconds
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: u64,

    /// Number of characters in a code
    #[serde(default = "default_code_length")]
    pub code_length: usize,

    /// Subject line of the notification
    #[serde(default = "default_subject")]
    pub subject: String,

    /// Generator used on a cache miss
    #[serde(default = "default_generator")]
    pub generator: GeneratorKind,
}

impl Default for IssuanceConfig {
    fn default() -> Self {
        Self {
            cache_prefix: default_cache_prefix(),
            ttl_seconds: default_ttl_seconds(),
            code_length: default_code_length(),
            subject: default_subject(),
            generator: default_generator(),
        }
    }
}

impl IssuanceConfig {
    /// Cache key for an identity
    pub fn cache_key(&self, identity: &str) -> String {
        format!("{}{}", self.cache_prefix, identity)
    }

    /// Validity window rounded up to whole minutes
    pub fn validity_minutes(&self) -> u64 {
        self.ttl_seconds.div_ceil(60)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ttl_seconds == 0 || self.ttl_seconds > MAX_TTL_SECONDS {
            return Err(ConfigError::invalid(
                "issuance.ttl_seconds",
                format!("must be between 1 and {}", MAX_TTL_SECONDS),
            ));
        }
        if self.code_length == 0 || self.code_length > MAX_CODE_LENGTH {
            return Err(ConfigError::invalid(
                "issuance.code_length",
                format!("must be between 1 and {}", MAX_CODE_LENGTH),
            ));
        }
        if self.subject.trim().is_empty() {
            return Err(ConfigError::invalid("issuance.subject", "must not be empty"));
        }
        Ok(())
    }
}

fn default_cache_prefix() -> String {
    String::from("code_")
}

fn default_ttl_seconds() -> u64 {
    600
}

fn default_code_length() -> usize {
    4
}

fn default_subject() -> String {
    String::from("Verification Code")
}

fn default_generator() -> GeneratorKind {
    GeneratorKind::Uuid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_is_prefix_plus_identity() {
        let config = IssuanceConfig::default();
        assert_eq!(config.cache_key("user@example.com"), "code_user@example.com");
        assert_eq!(config.cache_key(""), "code_");
    }

    #[test]
    fn test_validity_minutes_rounds_up() {
        let mut config = IssuanceConfig::default();
        assert_eq!(config.validity_minutes(), 10);

        config.ttl_seconds = 90;
        assert_eq!(config.validity_minutes(), 2);
    }

    #[test]
    fn test_validate_bounds() {
        let mut config = IssuanceConfig::default();
        assert!(config.validate().is_ok());

        config.code_length = MAX_CODE_LENGTH + 1;
        assert!(config.validate().is_err());

        config.code_length = 0;
        assert!(config.validate().is_err());

        config.code_length = 6;
        config.subject = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_ttl_bounds() {
        let mut config = IssuanceConfig::default();

        config.ttl_seconds = MAX_TTL_SECONDS;
        assert!(config.validate().is_ok());

        config.ttl_seconds = MAX_TTL_SECONDS + 1;
        assert!(config.validate().is_err());

        config.ttl_seconds = u64::MAX;
        assert!(config.validate().is_err());

        config.ttl_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let config: IssuanceConfig = serde_json::from_str(r#"{"ttl_seconds": 300}"#).unwrap();
        assert_eq!(config.ttl_seconds, 300);
        assert_eq!(config.cache_prefix, "code_");
        assert_eq!(config.generator, GeneratorKind::Uuid);
    }
}
