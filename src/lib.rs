//! # Harvest API Rust Client
//!
//! A Rust client for the Harvest time-tracking REST API. It authenticates
//! requests, classifies responses, and maps the JSON it gets back into
//! navigable resources without callers building URLs or parsing JSON.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`HarvestConfig`] and [`HarvestConfigBuilder`]
//! - Validated newtypes for the account URL and credentials
//! - A blocking HTTP transport with basic auth and status classification
//! - A declarative resource model: kinds, lazily coerced fields, and
//!   relationship accessors registered once per kind
//!
//! ## Quick Start
//!
//! ```rust
//! use harvest_api::{HarvestConfig, AccountUrl, Username, Password};
//!
//! let config = HarvestConfig::builder()
//!     .account(AccountUrl::new("acme").unwrap())
//!     .credentials(
//!         Username::new("me@example.com").unwrap(),
//!         Password::new("secret").unwrap(),
//!     )
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.account().as_ref(), "https://acme.harvestapp.com");
//! ```
//!
//! ## Fetching Resources
//!
//! ```rust,ignore
//! use harvest_api::Session;
//! use harvest_api::rest::{DayArg, Params};
//!
//! let session = Session::connect(&config)?;
//!
//! let project = session.projects().get(42)?;
//! let started = project.date("earliest_record_at")?;
//!
//! for assignment in project.fetch_children("get_task_assignments", &Params::new())? {
//!     let task = assignment.fetch_linked("get_task")?;
//!     println!("{}", task.field::<String>("name")?);
//! }
//!
//! // Three days ago
//! let day = session.day().for_date(Some(DayArg::Number(-3)), None)?;
//! ```
//!
//! ## Errors
//!
//! Transport failures are [`HttpError`]s: [`AuthError`] for 401,
//! [`ThrottleError`] for 503 (with the `Retry-After` hint), and [`ApiError`]
//! for everything else, including undecodable bodies. The resource layer
//! wraps them unchanged in [`ResourceError::Http`].
//!
//! ## Design Principles
//!
//! - **Blocking calls**: every fetch blocks until the transport completes
//! - **No caching**: every read of a kind goes to the API
//! - **Fail-fast validation**: all newtypes validate on construction
//! - **Immutable sessions**: a session never changes after creation

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

mod session;

// Re-export public types at crate root for convenience
pub use config::{AccountUrl, HarvestConfig, HarvestConfigBuilder, Password, Username};
pub use error::ConfigError;
pub use session::Session;

// Re-export HTTP client types
pub use clients::{
    ApiError, AuthError, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, ThrottleError, Transport,
};

// Re-export resource model types
pub use rest::{DayArg, Field, Params, Resource, ResourceError, ResourceKind};
