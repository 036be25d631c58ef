//! HTTP transport types for Harvest API communication.
//!
//! This module provides the transport layer the resource model sits on. It
//! attaches credentials, sends requests, and classifies responses.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Transport`]: The trait the resource layer talks to
//! - [`HttpClient`]: The blocking reqwest-backed [`Transport`]
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A raw response, with status classification
//! - [`HttpError`]: Auth, throttle, generic API, and network failures
//!
//! # Status Classification
//!
//! - **200, 201, 202, 304**: body decoded as JSON (decode failure is [`ApiError`])
//! - **401**: [`AuthError`]
//! - **503**: [`ThrottleError`] with the `Retry-After` hint
//! - **anything else**: [`ApiError`]
//!
//! Nothing is retried automatically.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use errors::{ApiError, AuthError, HttpError, ThrottleError};
pub use http_client::{HttpClient, JSON_MIME_TYPE, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, SUCCESS_CODES};
pub use transport::Transport;
