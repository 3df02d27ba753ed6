//! Shared error type across netpolicy crates.

use thiserror::Error;

/// Caller-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Policy authority call failed or the authority is unreachable.
    AuthorityUnavailable,
    /// Metrics collector rejected an event.
    Telemetry,
    /// Invalid input / malformed config.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs and diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::AuthorityUnavailable => "AUTHORITY_UNAVAILABLE",
            ErrorCode::Telemetry => "TELEMETRY",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, NetPolicyError>;

/// Unified error type used by core and store.
#[derive(Debug, Error)]
pub enum NetPolicyError {
    #[error("policy authority unavailable: {0}")]
    AuthorityUnavailable(String),
    #[error("telemetry: {0}")]
    Telemetry(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl NetPolicyError {
    /// Map an error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            NetPolicyError::AuthorityUnavailable(_) => ErrorCode::AuthorityUnavailable,
            NetPolicyError::Telemetry(_) => ErrorCode::Telemetry,
            NetPolicyError::BadRequest(_) => ErrorCode::BadRequest,
            NetPolicyError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            NetPolicyError::Internal(_) => ErrorCode::Internal,
        }
    }
}
