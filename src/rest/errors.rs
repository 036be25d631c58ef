//! Resource-level error types.
//!
//! [`ResourceError`] covers the failures the resource model itself can
//! produce and wraps transport failures without changing their kind:
//!
//! - [`ResourceError::NotSupported`]: the kind lacks the path (or accessor) an operation needs
//! - [`ResourceError::FieldNotFound`]: a field is absent from the raw data
//! - [`ResourceError::InvalidField`]: a field is present but its declared coercion failed
//! - [`ResourceError::InvalidArgument`]: malformed input to a fetch
//! - [`ResourceError::Http`]: an auth, throttle, API, or network error from the transport
//!
//! # Example
//!
//! ```rust,ignore
//! use harvest_api::clients::HttpError;
//! use harvest_api::rest::ResourceError;
//!
//! match session.projects().get(42) {
//!     Ok(project) => println!("{}", project.field::<String>("name")?),
//!     Err(ResourceError::Http(HttpError::Throttle(e))) => {
//!         println!("retry after {:?}", e.retry_after);
//!     }
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use crate::clients::{ApiError, HttpError};
use thiserror::Error;

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The operation is not available for this kind.
    ///
    /// Returned when a fetch is attempted against a kind lacking the required
    /// path template, or an unknown relationship accessor is invoked.
    #[error("{kind} does not support {operation}")]
    NotSupported {
        /// The kind name (e.g., "Project").
        kind: &'static str,
        /// The operation attempted (e.g., "get", "all", "get_payments").
        operation: String,
    },

    /// The field is absent from the resource's raw data.
    ///
    /// A field that is present with a `null` value does not produce this error.
    #[error("{kind} has no field '{field}'")]
    FieldNotFound {
        /// The kind name.
        kind: &'static str,
        /// The requested field.
        field: String,
    },

    /// The field is present but could not be coerced to its declared type.
    #[error("{kind}.{field} could not be read: {reason}")]
    InvalidField {
        /// The kind name.
        kind: &'static str,
        /// The field being read.
        field: String,
        /// Why the coercion failed.
        reason: String,
    },

    /// The caller supplied an argument the operation cannot use.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A transport error, propagated unchanged.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    pub(crate) fn not_supported(kind: &'static str, operation: impl Into<String>) -> Self {
        Self::NotSupported {
            kind,
            operation: operation.into(),
        }
    }

    /// Builds the error for a response whose JSON shape does not match the
    /// operation (an array where one item was expected, or the reverse).
    pub(crate) fn unexpected_shape(kind: &'static str, expected: &str) -> Self {
        Self::Http(HttpError::Api(ApiError::decode(format!(
            "expected {expected} for {kind}"
        ))))
    }

    /// Returns the transport error, if this is one.
    #[must_use]
    pub const fn http(&self) -> Option<&HttpError> {
        match self {
            Self::Http(e) => Some(e),
            _ => None,
        }
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
