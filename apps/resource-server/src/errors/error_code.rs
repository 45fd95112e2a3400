//! Error codes that appear in Problem Details responses.
//!
//! Only errors raised by this server carry a code. Responses relayed from
//! the authorization service are forwarded untouched and never get one.

use core::fmt;

/// Centralized error codes.
///
/// Each variant maps to a SCREAMING_SNAKE_CASE string that appears in the
/// `code` field of an `application/problem+json` body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Internal server error
    InternalError,
    /// The authorization service produced a response that cannot be relayed
    InvalidUpstreamResponse,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 3] = [
        Self::InternalError,
        Self::InvalidUpstreamResponse,
        Self::ConfigError,
    ];

    /// The exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InternalError => "INTERNAL_ERROR",
            Self::InvalidUpstreamResponse => "INVALID_UPSTREAM_RESPONSE",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
