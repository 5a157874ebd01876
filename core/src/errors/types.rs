//! Collaborator faults and issuance failure classification

use thiserror::Error;

use crate::domain::value_objects::ErrorCode;

/// A raised failure from the cache or the notifier
///
/// Distinct from a collaborator reporting `false`: the cache answering "not
/// persisted" is a normal outcome, a `TransportFault` means the call itself
/// did not complete.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportFault {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Operation timed out: {0}")]
    Timeout(String),

    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("{0}")]
    Other(String),
}

/// Why an issuance did not succeed
#[derive(Error, Debug)]
pub enum IssuanceError {
    #[error("Cache declined to persist the new code")]
    CachePersistFailed,

    #[error("Cache read failed: {0}")]
    CacheRead(TransportFault),

    #[error("Cache write failed: {0}")]
    CacheWrite(TransportFault),

    #[error("Notification failed: {0}")]
    Notify(TransportFault),

    #[error("Notifier declined the message")]
    NotificationRejected,

    #[error("Issuance panicked: {0}")]
    Panicked(String),
}

impl IssuanceError {
    /// Collapse the failure into the wire-level outcome
    pub fn error_code(&self) -> ErrorCode {
        match self {
            IssuanceError::CachePersistFailed => ErrorCode::CacheError,
            _ => ErrorCode::InternalError,
        }
    }

    /// Short tag used as the `reason` field in structured logs
    pub fn reason(&self) -> &'static str {
        match self {
            IssuanceError::CachePersistFailed => "cache_persist_failed",
            IssuanceError::CacheRead(_) => "cache_read",
            IssuanceError::CacheWrite(_) => "cache_write",
            IssuanceError::Notify(_) => "notify",
            IssuanceError::NotificationRejected => "notification_rejected",
            IssuanceError::Panicked(_) => "panicked",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_persist_failure_maps_to_cache_error() {
        assert_eq!(IssuanceError::CachePersistFailed.error_code(), ErrorCode::CacheError);

        let internal = [
            IssuanceError::CacheRead(TransportFault::Connection("refused".into())),
            IssuanceError::CacheWrite(TransportFault::Other("WRONGTYPE".into())),
            IssuanceError::Notify(TransportFault::Timeout("smtp".into())),
            IssuanceError::NotificationRejected,
            IssuanceError::Panicked("boom".into()),
        ];
        for err in internal {
            assert_eq!(err.error_code(), ErrorCode::InternalError, "{}", err);
        }
    }

    #[test]
    fn test_display_includes_cause() {
        let err = IssuanceError::CacheRead(TransportFault::Connection("refused".into()));
        assert_eq!(err.to_string(), "Cache read failed: Connection failed: refused");
        assert_eq!(err.reason(), "cache_read");
    }
}
