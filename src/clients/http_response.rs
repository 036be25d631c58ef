//! HTTP response types for the Harvest API client.
//!
//! This module provides the [`HttpResponse`] type and the status
//! classification every transport applies before handing data back to the
//! resource layer.

use std::collections::HashMap;

use crate::clients::errors::{ApiError, AuthError, HttpError, ThrottleError};

/// Status codes whose body is decoded as a successful result.
pub const SUCCESS_CODES: [u16; 4] = [200, 201, 202, 304];

/// An HTTP response from the Harvest API, before classification.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lower-cased name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<String>) -> Self {
        Self {
            code,
            headers,
            body: body.into(),
        }
    }

    /// Returns `true` if the status is one Harvest uses for success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        SUCCESS_CODES.contains(&self.code)
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the raw `Retry-After` header value, if present.
    #[must_use]
    pub fn retry_after(&self) -> Option<&str> {
        self.header("retry-after")
    }

    /// Classifies the response and decodes a successful body as JSON.
    ///
    /// - 200, 201, 202, 304: the body is decoded; invalid JSON is an [`ApiError`]
    /// - 401: [`AuthError`]
    /// - 503: [`ThrottleError`] carrying the `Retry-After` value
    /// - anything else: [`ApiError`]
    ///
    /// # Errors
    ///
    /// Returns the classified [`HttpError`] for any non-success response.
    pub fn into_json(self) -> Result<serde_json::Value, HttpError> {
        match self.code {
            code if SUCCESS_CODES.contains(&code) => {
                serde_json::from_str(&self.body).map_err(|e| ApiError::decode(e).into())
            }
            401 => {
                tracing::warn!("Harvest rejected the configured credentials");
                Err(AuthError { body: self.body }.into())
            }
            503 => {
                let retry_after = self.retry_after().map(String::from);
                tracing::warn!(retry_after = ?retry_after, "Harvest rate limit hit");
                Err(ThrottleError {
                    body: self.body,
                    retry_after,
                }
                .into())
            }
            code => Err(ApiError::status(code, self.body).into()),
        }
    }
}
