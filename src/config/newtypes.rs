//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Walmart Open API key.
///
/// The key is attached to every request, so it is masked in debug output
/// to keep it out of logs.
///
/// # Example
///
/// ```rust
/// use walmart_api::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A LinkShare affiliate id.
///
/// Substituted for the `|LSNID|` token in product tracking URLs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkShareId(String);

impl LinkShareId {
    /// Creates a new validated LinkShare id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyLinkShareId`] if the id is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        let id = id.trim();
        if id.is_empty() {
            return Err(ConfigError::EmptyLinkShareId);
        }
        Ok(Self(id.to_string()))
    }
}

impl AsRef<str> for LinkShareId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated API base URL.
///
/// Always ends with `/` so endpoint paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use walmart_api::BaseUrl;
///
/// let url = BaseUrl::new("http://localhost:8080/v1").unwrap();
/// assert_eq!(url.as_ref(), "http://localhost:8080/v1/");
/// assert_eq!(url.scheme(), "http");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
}

impl BaseUrl {
    /// The public Walmart Open API base URL.
    pub const DEFAULT: &'static str = "http://api.walmartlabs.com/v1/";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let mut url = url.trim().to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        let remainder = &url[scheme_end + 3..];
        let host = remainder
            .find(['/', '?', '#'])
            .map_or(remainder, |i| &remainder[..i]);
        if host.is_empty() || host.starts_with(':') {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        if remainder.contains(['?', '#']) {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        if !url.ends_with('/') {
            url.push('/');
        }

        Ok(Self { url, scheme_end })
    }

    /// Returns the URL scheme (e.g., "http").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Joins an endpoint path onto this base URL.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.url, path.trim_start_matches('/'))
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT.to_string(),
            scheme_end: 4,
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}
