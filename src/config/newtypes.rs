//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Harvest username (the email address used to sign in).
///
/// # Example
///
/// ```rust
/// use harvest_api::Username;
///
/// let user = Username::new("me@example.com").unwrap();
/// assert_eq!(user.as_ref(), "me@example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Creates a new validated username.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUsername`] if the username is empty.
    pub fn new(username: impl Into<String>) -> Result<Self, ConfigError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(ConfigError::EmptyUsername);
        }
        Ok(Self(username))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Harvest password.
///
/// # Security
///
/// The `Debug` implementation masks the value, displaying only
/// `Password(*****)`.
///
/// ```rust
/// use harvest_api::Password;
///
/// let password = Password::new("hunter2").unwrap();
/// assert_eq!(format!("{:?}", password), "Password(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Creates a new validated password.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPassword`] if the password is empty.
    pub fn new(password: impl Into<String>) -> Result<Self, ConfigError> {
        let password = password.into();
        if password.is_empty() {
            return Err(ConfigError::EmptyPassword);
        }
        Ok(Self(password))
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(*****)")
    }
}

/// The base URL of a Harvest account.
///
/// Accepts the short forms people actually type and resolves them to a
/// full `https` URL.
///
/// # Accepted Formats
///
/// - `acme` - resolved to `https://acme.harvestapp.com`
/// - `acme.example.com` - resolved to `https://acme.example.com`
/// - `http://localhost:8080` - anything starting with `http` is used as-is
///
/// # Example
///
/// ```rust
/// use harvest_api::AccountUrl;
///
/// let url = AccountUrl::new("acme").unwrap();
/// assert_eq!(url.as_ref(), "https://acme.harvestapp.com");
///
/// let url = AccountUrl::new("time.acme.io").unwrap();
/// assert_eq!(url.as_ref(), "https://time.acme.io");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountUrl(String);

impl AccountUrl {
    const DOMAIN: &'static str = "harvestapp.com";

    /// Resolves a subdomain, host, or full URL into an account URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAccountUrl`] if the value is empty or
    /// contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.is_empty() || trimmed.contains(char::is_whitespace) {
            return Err(ConfigError::InvalidAccountUrl { url: value });
        }

        let url = if trimmed.starts_with("http") {
            trimmed.trim_end_matches('/').to_string()
        } else if trimmed.contains('.') {
            format!("https://{trimmed}")
        } else {
            format!("https://{trimmed}.{}", Self::DOMAIN)
        };

        Ok(Self(url))
    }
}

impl AsRef<str> for AccountUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for AccountUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AccountUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
