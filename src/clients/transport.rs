//! The seam between the resource layer and HTTP.

use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpRequest;

/// Performs one request against the Harvest API.
///
/// Implementations attach credentials and standard headers, send the request,
/// and classify the response the way [`HttpResponse::into_json`] does:
/// a decoded JSON value on success, otherwise an [`HttpError`].
///
/// The resource layer never inspects status codes itself, so a test double
/// only needs to return canned values or errors.
///
/// Calls block the current thread until the response arrives.
///
/// [`HttpResponse::into_json`]: crate::clients::HttpResponse::into_json
pub trait Transport: Send + Sync {
    /// Sends `request` and returns the decoded response body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for rejected credentials, throttling, any other
    /// non-success status, an undecodable body, or a connection failure.
    fn request(&self, request: &HttpRequest) -> Result<serde_json::Value, HttpError>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn request(&self, request: &HttpRequest) -> Result<serde_json::Value, HttpError> {
        (**self).request(request)
    }
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn request(&self, request: &HttpRequest) -> Result<serde_json::Value, HttpError> {
        (**self).request(request)
    }
}
