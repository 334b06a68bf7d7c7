//! # Status classification
//!
//! A fixed table from transport outcome / HTTP status / envelope `code` to an
//! [`ApiError`] carrying the user-facing text.
//!
//! | Condition | Result |
//! |-----------|--------|
//! | timeout | [`ApiError::Timeout`] |
//! | network unreachable | [`ApiError::Network`] |
//! | HTTP 400 | server message or [`messages::BAD_REQUEST`] |
//! | HTTP / code 401 | [`ApiError::Unauthorized`] |
//! | HTTP / code 403 | [`ApiError::Forbidden`] |
//! | HTTP 404 | [`messages::NOT_FOUND`] |
//! | HTTP 500 | [`messages::SERVER_ERROR`] |
//! | other non-2xx | server message or `Request failed ({status})` |
//! | other non-200 code | server message or [`messages::OPERATION_FAILED`] |

use serde::Deserialize;

use crate::envelope::SUCCESS_CODE;
use crate::error::ApiError;
use crate::transport::TransportError;

pub mod messages {
    pub const SESSION_EXPIRED: &str = "Your session has expired, please log in again";
    pub const FORBIDDEN: &str = "You do not have permission to perform this operation";
    pub const BAD_REQUEST: &str = "Invalid request parameters";
    pub const NOT_FOUND: &str = "The requested resource does not exist";
    pub const SERVER_ERROR: &str = "Internal server error";
    pub const TIMEOUT: &str = "Request timed out, please try again later";
    pub const NETWORK: &str = "Network connection failed, please check your network";
    pub const OPERATION_FAILED: &str = "Operation failed";
    pub const REQUEST_FAILED: &str = "Request failed";
    pub const UNAUTHORIZED: &str = "Unauthorized";
    pub const PERMISSION_DENIED: &str = "Permission denied";
}

/// Loose view of an error body; only `message` is ever read.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

fn body_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()?
        .message
        .filter(|m| !m.trim().is_empty())
}

fn non_empty(message: Option<&str>) -> Option<String> {
    message.filter(|m| !m.trim().is_empty()).map(str::to_string)
}

/// Map a failed send to an error.
pub fn classify_transport(err: &TransportError) -> ApiError {
    match err {
        TransportError::Timeout => ApiError::Timeout,
        TransportError::Network(detail) => ApiError::Network(detail.clone()),
        TransportError::Other(detail) => ApiError::Http {
            status: 0,
            message: if detail.is_empty() {
                messages::REQUEST_FAILED.to_string()
            } else {
                detail.clone()
            },
        },
    }
}

/// Map a non-2xx HTTP response to an error.
pub fn classify_http(status: u16, body: &str) -> ApiError {
    let server = body_message(body);
    match status {
        400 => ApiError::Http {
            status,
            message: server.unwrap_or_else(|| messages::BAD_REQUEST.to_string()),
        },
        401 => ApiError::Unauthorized {
            message: server.unwrap_or_else(|| messages::UNAUTHORIZED.to_string()),
        },
        403 => ApiError::Forbidden {
            message: server.unwrap_or_else(|| messages::PERMISSION_DENIED.to_string()),
        },
        404 => ApiError::Http {
            status,
            message: messages::NOT_FOUND.to_string(),
        },
        500 => ApiError::Http {
            status,
            message: messages::SERVER_ERROR.to_string(),
        },
        _ => ApiError::Http {
            status,
            message: server.unwrap_or_else(|| format!("{} ({status})", messages::REQUEST_FAILED)),
        },
    }
}

/// Map an envelope `code` to success (`None`) or an error.
pub fn classify_business(code: i64, message: Option<&str>) -> Option<ApiError> {
    match code {
        SUCCESS_CODE => None,
        401 => Some(ApiError::Unauthorized {
            message: non_empty(message).unwrap_or_else(|| messages::UNAUTHORIZED.to_string()),
        }),
        403 => Some(ApiError::Forbidden {
            message: non_empty(message).unwrap_or_else(|| messages::PERMISSION_DENIED.to_string()),
        }),
        _ => Some(ApiError::Business {
            code,
            message: non_empty(message).unwrap_or_else(|| messages::OPERATION_FAILED.to_string()),
        }),
    }
}
