//! Wire-level outcome of an issuance call

use serde::{Deserialize, Serialize};
use std::fmt;

/// Terminal outcome of one issuance request
///
/// Serialized as its numeric value (`0`, `1`, `2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ErrorCode {
    /// Code persisted (or reused) and delivered
    Success = 0,
    /// The store reported that a new code could not be persisted
    CacheError = 1,
    /// Any raised fault from the cache or the notifier
    InternalError = 2,
}

impl ErrorCode {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<ErrorCode> for u8 {
    fn from(value: ErrorCode) -> Self {
        value.code()
    }
}

impl TryFrom<u8> for ErrorCode {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::CacheError),
            2 => Ok(ErrorCode::InternalError),
            other => Err(format!("Unknown error code: {}", other)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Success => write!(f, "success"),
            ErrorCode::CacheError => write!(f, "cache_error"),
            ErrorCode::InternalError => write!(f, "internal_error"),
        }
    }
}
