//! # Error taxonomy
//!
//! Failures come from two layers and end up in one enum:
//!
//! - **transport**: the request never produced an HTTP response
//!   ([`ApiError::Timeout`], [`ApiError::Network`]) or produced a non-2xx
//!   status ([`ApiError::Http`], or the auth variants for 401/403);
//! - **business**: a 2xx response whose envelope `code` is not 200
//!   ([`ApiError::Business`], or the auth variants for 401/403).
//!
//! Each variant already carries the text shown to the user; see
//! [`crate::classify`] for how it is chosen.

use thiserror::Error;

use crate::classify::messages;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request timed out")]
    Timeout,

    #[error("network unreachable: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("forbidden: {message}")]
    Forbidden { message: String },

    #[error("business error {code}: {message}")]
    Business { code: i64, message: String },

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("response carried no data")]
    MissingData,

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Text for the transient notification raised by the client.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Timeout => messages::TIMEOUT.to_string(),
            ApiError::Network(_) => messages::NETWORK.to_string(),
            ApiError::Http { message, .. } => message.clone(),
            ApiError::Unauthorized { .. } => messages::SESSION_EXPIRED.to_string(),
            ApiError::Forbidden { .. } => messages::FORBIDDEN.to_string(),
            ApiError::Business { message, .. } => message.clone(),
            ApiError::Decode(_) | ApiError::InvalidRequest(_) => messages::REQUEST_FAILED.to_string(),
            ApiError::MissingData => messages::OPERATION_FAILED.to_string(),
        }
    }

    /// True when the session must be dropped and the user sent to login.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }
}
