//! Shared error type across chatprism crates.

use thiserror::Error;

/// Stable error codes, safe to surface to callers and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// A builder was called with arguments it cannot work with.
    InvalidArgument,
    /// Malformed relay command or config document.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Encoding or I/O failure.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs and test vectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ChatPrismError>;

/// Unified error type used by core and relay.
#[derive(Debug, Error)]
pub enum ChatPrismError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl ChatPrismError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            ChatPrismError::InvalidArgument(_) => ErrorCode::InvalidArgument,
            ChatPrismError::BadRequest(_) => ErrorCode::BadRequest,
            ChatPrismError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            ChatPrismError::Internal(_) => ErrorCode::Internal,
        }
    }
}
