//! API utilities for talking to the remote storefront services
//!
//! Provides URL helpers and the error type shared by every HTTP client.

use thiserror::Error;

/// Failure of a request to a remote service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS...)
    #[error("Failed to send request: {0}")]
    Network(String),
    /// The service answered with a non-success status
    #[error("Request failed: {status}")]
    Status { status: u16, message: Option<String> },
    /// The response body was not what we expected
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message sent by the server along with a failure status, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

/// Join a base URL and a path, tolerating a trailing slash on the base
///
/// # Example
/// ```rust
/// # use frontend::shared::api_utils::join_url;
/// let url = join_url("https://example.com/api/v1/", "/showAllCategory");
/// assert_eq!(url, "https://example.com/api/v1/showAllCategory");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Value for the `Authorization` header
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
