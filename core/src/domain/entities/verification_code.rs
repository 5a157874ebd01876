//! Verification code entity.
//!
//! A code has no identity of its own: it only exists as the cache value stored
//! under `prefix + identity` until the cache expires it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default number of characters in a verification code
pub const CODE_LENGTH: usize = 4;

/// A short code delivered to the user out of band
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerificationCode(String);

impl VerificationCode {
    /// Wraps a code read from the cache or produced by a generator
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Builds a code from the first `length` characters of `source`
    ///
    /// Unique-id sources produce longer values than a code needs; truncation is
    /// deterministic and collisions are accepted for the short code lifetime.
    pub fn truncated(source: &str, length: usize) -> Self {
        Self(source.chars().take(length).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the code
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for VerificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VerificationCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
