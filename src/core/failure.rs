//! Remote failure classification
//!
//! Decides whether a failed remote-store call should be retried, and models
//! acceptable outcomes (e.g. `cp -n` finding an existing destination) that
//! are neither success nor failure.

use std::fmt;
use thiserror::Error;

/// Error returned by a remote-store call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// Structured service error with a code
    #[error("{code}: {message}")]
    Service { code: String, message: String },

    /// Service error carried by an HTTP response
    #[error("{code}: {message}\n\tstatus code: {status}, request id: {request_id}")]
    Request {
        code: String,
        message: String,
        status: u16,
        request_id: String,
    },

    /// Anything without structure, e.g. a transport or local failure
    #[error("{message}")]
    Generic { message: String },
}

impl RemoteError {
    /// Create a new service error
    pub fn service(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Service {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a new request failure
    pub fn request(
        code: impl Into<String>,
        message: impl Into<String>,
        status: u16,
        request_id: impl Into<String>,
    ) -> Self {
        Self::Request {
            code: code.into(),
            message: message.into(),
            status,
            request_id: request_id.into(),
        }
    }

    /// Create a new unstructured error
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }

    /// Service error code, if any
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Service { code, .. } | Self::Request { code, .. } => Some(code),
            Self::Generic { .. } => None,
        }
    }
}

/// Retry verdict for a remote error, along with the code that caused it
pub fn is_retryable(err: Option<&RemoteError>) -> (String, bool) {
    let Some(err) = err else {
        return (String::new(), false);
    };

    if let Some(code @ ("SlowDown" | "SerializationError")) = err.code() {
        return (code.to_string(), true);
    }

    if let RemoteError::Request { code, status, .. } = err {
        if matches!(code.as_str(), "InternalError" | "SerializationError") {
            return (code.clone(), true);
        }
        if matches!(status, 400 | 500) {
            return (format!("HTTP{status}"), true);
        }
    }

    (String::new(), false)
}

/// Flatten a multi-line error message into a single line
pub fn cleanup(err: &impl fmt::Display) -> String {
    err.to_string()
        .replace(['\n', '\t'], " ")
        .replace("  ", " ")
        .replace("  ", " ")
        .trim()
        .to_string()
}

/// Benign outcome that is not counted as a failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct AcceptableError {
    message: String,
}

impl AcceptableError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result of a remote call: success, acceptable skip, or failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T, E = RemoteError> {
    Success(T),
    Acceptable(AcceptableError),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// The acceptable error, if this outcome is one
    pub fn acceptable(&self) -> Option<&AcceptableError> {
        match self {
            Self::Acceptable(e) => Some(e),
            _ => None,
        }
    }

    /// Only failures count towards the exit code
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

impl<T> Outcome<T, RemoteError> {
    /// Retry verdict; only failures are ever retried
    pub fn retry_verdict(&self) -> (String, bool) {
        match self {
            Self::Failure(e) => is_retryable(Some(e)),
            Self::Success(_) | Self::Acceptable(_) => (String::new(), false),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(v) => Self::Success(v),
            Err(e) => Self::Failure(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throttled_service_error_is_retryable() {
        let err = RemoteError::service("SlowDown", "Please reduce your request rate.");
        assert_eq!(is_retryable(Some(&err)), ("SlowDown".to_string(), true));

        let err = RemoteError::service("SerializationError", "failed to decode");
        assert_eq!(is_retryable(Some(&err)), ("SerializationError".to_string(), true));
    }

    #[test]
    fn test_service_error_without_transport_is_not_retryable() {
        let err = RemoteError::service("InternalError", "oops");
        assert_eq!(is_retryable(Some(&err)), (String::new(), false));
    }

    #[test]
    fn test_request_failure_codes() {
        let err =
            RemoteError::request("InternalError", "We encountered an internal error", 503, "abc");
        assert_eq!(is_retryable(Some(&err)), ("InternalError".to_string(), true));

        let err = RemoteError::request("SlowDown", "throttled", 503, "abc");
        assert_eq!(is_retryable(Some(&err)), ("SlowDown".to_string(), true));
    }

    #[test]
    fn test_request_failure_status() {
        let err = RemoteError::request("SomethingElse", "boom", 500, "req-1");
        assert_eq!(is_retryable(Some(&err)), ("HTTP500".to_string(), true));

        let err = RemoteError::request("BadDigest", "bad", 400, "req-2");
        assert_eq!(is_retryable(Some(&err)), ("HTTP400".to_string(), true));

        let err = RemoteError::request("NoSuchKey", "missing", 404, "req-3");
        assert_eq!(is_retryable(Some(&err)), (String::new(), false));
    }

    #[test]
    fn test_missing_or_unstructured_error() {
        assert_eq!(is_retryable(None), (String::new(), false));

        let err = RemoteError::generic("connection reset by peer");
        assert_eq!(is_retryable(Some(&err)), (String::new(), false));
    }

    #[test]
    fn test_cleanup() {
        assert_eq!(cleanup(&"line one\n\tline two  end"), "line one line two end");

        let err =
            RemoteError::request("NoSuchKey", "The specified key does not exist.", 404, "ABC123");
        assert_eq!(
            cleanup(&err),
            "NoSuchKey: The specified key does not exist. status code: 404, request id: ABC123"
        );
    }

    #[test]
    fn test_acceptable_outcome() {
        let skipped: Outcome<()> =
            Outcome::Acceptable(AcceptableError::new("object already exists"));
        assert_eq!(
            skipped.acceptable().map(ToString::to_string).as_deref(),
            Some("object already exists")
        );
        assert!(!skipped.is_failure());
        assert_eq!(skipped.retry_verdict(), (String::new(), false));
    }

    #[test]
    fn test_failure_outcome() {
        let failed =
            Outcome::from(Err::<u64, _>(RemoteError::service("SlowDown", "slow down")));
        assert!(failed.is_failure());
        assert!(failed.acceptable().is_none());
        assert_eq!(failed.retry_verdict(), ("SlowDown".to_string(), true));

        let done: Outcome<u64> = Outcome::from(Ok(42));
        assert!(done.acceptable().is_none());
        assert!(!done.is_failure());
        assert_eq!(done.retry_verdict(), (String::new(), false));
    }
}
