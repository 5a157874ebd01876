//! Issuance request and response messages

use serde::{Deserialize, Serialize};

use super::error_code::ErrorCode;

/// One call to issue a code for an identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuanceRequest {
    /// Recipient identity, used verbatim in the cache key
    #[serde(alias = "email")]
    pub identity: String,
}

impl IssuanceRequest {
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
        }
    }
}

/// Result of an issuance call
///
/// Never carries the code: it reaches the user only through the notifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuanceResponse {
    /// The identity from the request, unchanged
    pub identity: String,
    pub error_code: ErrorCode,
}

impl IssuanceResponse {
    pub fn new(identity: impl Into<String>, error_code: ErrorCode) -> Self {
        Self {
            identity: identity.into(),
            error_code,
        }
    }
}
