//! HTTP client for Harvest API communication.
//!
//! This module provides the [`HttpClient`] type, the default [`Transport`]
//! used by [`Session::connect`](crate::Session::connect).

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::Transport;
use crate::config::HarvestConfig;

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// MIME type sent in both `Accept` and `Content-Type`.
pub const JSON_MIME_TYPE: &str = "application/json";

/// Blocking HTTP client for making requests to the Harvest API.
///
/// The client handles:
/// - Base URL resolution from the configured account
/// - Default headers including User-Agent and basic auth credentials
/// - Status classification into [`HttpError`] variants
///
/// There is no retry logic here; throttling is reported as
/// [`HttpError::Throttle`] and left to the caller.
///
/// # Example
///
/// ```rust,no_run
/// use harvest_api::{HarvestConfig, AccountUrl, Username, Password};
/// use harvest_api::clients::{HttpClient, HttpRequest, Transport};
///
/// let config = HarvestConfig::builder()
///     .account(AccountUrl::new("acme").unwrap())
///     .credentials(Username::new("me@example.com").unwrap(), Password::new("secret").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config).unwrap();
/// let who_am_i = client.request(&HttpRequest::get("/account/who_am_i", None)).unwrap();
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::blocking::Client,
    /// Base URI (e.g., `https://acme.harvestapp.com`).
    base_uri: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &HarvestConfig) -> Result<Self, HttpError> {
        let base_uri = config.account().as_ref().to_string();
        let default_headers = Self::build_default_headers(config);

        let client = reqwest::blocking::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            base_uri,
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    fn build_default_headers(config: &HarvestConfig) -> HashMap<String, String> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}harvest-api-rust v{SDK_VERSION}");

        let credentials = format!(
            "{}:{}",
            config.username().as_ref(),
            config.password().as_ref()
        );
        let authorization = format!("Basic {}", STANDARD.encode(credentials));

        let mut headers = HashMap::new();
        headers.insert("Accept".to_string(), JSON_MIME_TYPE.to_string());
        headers.insert("Content-Type".to_string(), JSON_MIME_TYPE.to_string());
        headers.insert("User-Agent".to_string(), user_agent);
        headers.insert("Authorization".to_string(), authorization);
        headers
    }

    /// Sends a request and returns the unclassified response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the request could not be sent or
    /// the body could not be read.
    pub fn send(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        let url = request.url(&self.base_uri);
        tracing::debug!(method = %request.http_method, %url, "Harvest request");

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                req_builder = req_builder.header(key, value);
            }
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send()?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text()?;

        tracing::debug!(code, %url, "Harvest response");
        Ok(HttpResponse::new(code, headers, body))
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl Transport for HttpClient {
    fn request(&self, request: &HttpRequest) -> Result<serde_json::Value, HttpError> {
        self.send(request)?.into_json()
    }
}
