//! HTTP request types for the Harvest API client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the Harvest API.

use std::collections::HashMap;
use std::fmt;

/// HTTP methods supported by the Harvest API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    #[default]
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// An HTTP request to be sent to the Harvest API.
///
/// Use [`HttpRequest::get`] for the common case or [`HttpRequest::builder`]
/// for anything else.
///
/// # Example
///
/// ```rust
/// use harvest_api::clients::{HttpRequest, HttpMethod};
/// use serde_json::json;
///
/// let list = HttpRequest::builder(HttpMethod::Get, "/projects/")
///     .query_param("client", "42")
///     .build();
/// assert_eq!(list.url("https://acme.harvestapp.com"),
///     "https://acme.harvestapp.com/projects/?client=42");
///
/// let create = HttpRequest::builder(HttpMethod::Post, "/clients/")
///     .body(json!({"client": {"name": "Acme"}}))
///     .build();
/// assert!(create.body.is_some());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the account URL) for this request.
    pub path: String,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
    /// Query parameters to append to the URL.
    pub query: Option<HashMap<String, String>>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Creates a bodiless GET request with optional query parameters.
    #[must_use]
    pub fn get(path: impl Into<String>, query: Option<HashMap<String, String>>) -> Self {
        Self {
            http_method: HttpMethod::Get,
            path: path.into(),
            body: None,
            query: query.filter(|q| !q.is_empty()),
            extra_headers: None,
        }
    }

    /// Renders the full URL for this request against `base`.
    ///
    /// Query parameters are percent-encoded and sorted by key so the same
    /// request always renders the same URL.
    #[must_use]
    pub fn url(&self, base: &str) -> String {
        let mut url = format!("{base}{}", self.path);

        if let Some(query) = self.query.as_ref().filter(|q| !q.is_empty()) {
            let mut pairs: Vec<_> = query.iter().collect();
            pairs.sort();
            let encoded: Vec<String> = pairs
                .into_iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect();
            url.push('?');
            url.push_str(&encoded.join("&"));
        }

        url
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    query: Option<HashMap<String, String>>,
    extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            query: None,
            extra_headers: None,
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: HashMap<String, String>) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`].
    #[must_use]
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
            extra_headers: self.extra_headers,
        }
    }
}
