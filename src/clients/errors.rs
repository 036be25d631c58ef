//! HTTP-specific error types for the Harvest API client.
//!
//! The transport classifies every response into one of a small set of
//! failures:
//!
//! - [`AuthError`]: credentials rejected (HTTP 401)
//! - [`ThrottleError`]: rate limit hit (HTTP 503), with an optional retry hint
//! - [`ApiError`]: any other non-success status, or an unparsable body
//! - [`HttpError`]: unified error type encompassing all of the above plus
//!   connection failures
//!
//! # Example
//!
//! ```rust,ignore
//! use harvest_api::clients::{HttpError, Transport};
//!
//! match client.request(&request) {
//!     Ok(body) => println!("Success: {}", body),
//!     Err(HttpError::Auth(e)) => println!("Check your password: {}", e),
//!     Err(HttpError::Throttle(e)) => {
//!         println!("Slow down, retry after {:?}", e.retry_after);
//!     }
//!     Err(HttpError::Api(e)) => println!("API error {:?}: {}", e.code, e.message),
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Error returned when Harvest rejects the supplied credentials (HTTP 401).
///
/// Retrying will not help without new credentials.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Authentication failed: {body}")]
pub struct AuthError {
    /// The raw response body.
    pub body: String,
}

/// Error returned when the account's rate limit has been hit (HTTP 503).
///
/// The request may be retried once `retry_after` has elapsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Rate limit exceeded (retry after {retry_after:?}): {body}")]
pub struct ThrottleError {
    /// The raw response body.
    pub body: String,
    /// The raw `Retry-After` header value, if the server sent one.
    pub retry_after: Option<String>,
}

impl ThrottleError {
    /// Returns the retry hint in whole seconds, when it is numeric.
    #[must_use]
    pub fn retry_after_secs(&self) -> Option<u64> {
        self.retry_after.as_deref()?.trim().parse().ok()
    }
}

/// Error returned for any other failure reported by the API.
///
/// This covers non-success status codes as well as responses that claimed
/// success but carried a body that could not be decoded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    /// The HTTP status code, when the error came from a response.
    pub code: Option<u16>,
    /// The raw response body or a decode diagnostic.
    pub message: String,
}

impl ApiError {
    /// Creates an error for a non-success HTTP status.
    #[must_use]
    pub fn status(code: u16, body: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: body.into(),
        }
    }

    /// Creates an error for a body that could not be decoded.
    #[must_use]
    pub fn decode(reason: impl std::fmt::Display) -> Self {
        Self {
            code: None,
            message: format!("Failed to decode response: {reason}"),
        }
    }
}

/// Unified error type for all transport errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Credentials were rejected.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The rate limit was hit.
    #[error(transparent)]
    Throttle(#[from] ThrottleError),

    /// Any other API failure.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
