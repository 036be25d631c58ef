//! Configuration types for the Harvest API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HarvestConfig`]: The configuration struct holding account and credentials
//! - [`HarvestConfigBuilder`]: A builder for constructing [`HarvestConfig`] instances
//! - [`AccountUrl`]: The account base URL, resolved from a short form
//! - [`Username`]: A validated username newtype
//! - [`Password`]: A validated password newtype with masked debug output
//!
//! # Example
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

mod newtypes;

pub use newtypes::{AccountUrl, Password, Username};

use std::time::Duration;

use crate::error::ConfigError;

/// Default request timeout applied by the HTTP transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Harvest API client.
///
/// # Thread Safety
///
/// `HarvestConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct HarvestConfig {
    account: AccountUrl,
    username: Username,
    password: Password,
    user_agent_prefix: Option<String>,
    timeout: Duration,
}

impl HarvestConfig {
    /// Creates a new builder for constructing a `HarvestConfig`.
    #[must_use]
    pub fn builder() -> HarvestConfigBuilder {
        HarvestConfigBuilder::new()
    }

    /// Returns the account base URL.
    #[must_use]
    pub const fn account(&self) -> &AccountUrl {
        &self.account
    }

    /// Returns the username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the password.
    #[must_use]
    pub const fn password(&self) -> &Password {
        &self.password
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

// Verify HarvestConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HarvestConfig>();
};

/// Builder for constructing [`HarvestConfig`] instances.
///
/// Required fields are `account` and `credentials`.
///
/// # Defaults
///
/// - `user_agent_prefix`: `None`
/// - `timeout`: [`DEFAULT_TIMEOUT`]
#[derive(Debug, Default)]
pub struct HarvestConfigBuilder {
    account: Option<AccountUrl>,
    credentials: Option<(Username, Password)>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl HarvestConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the account URL (required).
    #[must_use]
    pub fn account(mut self, account: AccountUrl) -> Self {
        self.account = Some(account);
        self
    }

    /// Sets the basic auth credentials (required).
    #[must_use]
    pub fn credentials(mut self, username: Username, password: Password) -> Self {
        self.credentials = Some((username, password));
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`HarvestConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `account` or
    /// `credentials` are not set.
    pub fn build(self) -> Result<HarvestConfig, ConfigError> {
        let account = self
            .account
            .ok_or(ConfigError::MissingRequiredField { field: "account" })?;
        let (username, password) = self
            .credentials
            .ok_or(ConfigError::MissingRequiredField {
                field: "credentials",
            })?;

        Ok(HarvestConfig {
            account,
            username,
            password,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        })
    }
}
