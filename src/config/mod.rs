//! Configuration types for the Walmart API client.
//!
//! # Overview
//!
//! - [`WalmartConfig`]: The immutable configuration held by the client
//! - [`WalmartConfigBuilder`]: A builder for constructing [`WalmartConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`LinkShareId`]: The optional affiliate id used for tracking URLs
//! - [`BaseUrl`]: The API base URL (defaults to the public Walmart endpoint)
//!
//! # Example
//!
//! ```rust
//! use walmart_api::{WalmartConfig, ApiKey, LinkShareId};
//!
//! let config = WalmartConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .link_share_id(LinkShareId::new("ABC123").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiKey, BaseUrl, LinkShareId};

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for the Walmart API client.
///
/// # Thread Safety
///
/// `WalmartConfig` is `Clone`, `Send`, and `Sync`. It is never mutated after
/// [`WalmartConfigBuilder::build`], so sharing it between tasks needs no locking.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use walmart_api::{WalmartConfig, ApiKey};
///
/// let config = WalmartConfig::builder()
///     .api_key(ApiKey::new("your-api-key").unwrap())
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
///
/// assert!(config.link_share_id().is_none());
/// assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
/// ```
#[derive(Clone, Debug)]
pub struct WalmartConfig {
    api_key: ApiKey,
    link_share_id: Option<LinkShareId>,
    base_url: BaseUrl,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl WalmartConfig {
    /// Creates a new builder for constructing a `WalmartConfig`.
    #[must_use]
    pub fn builder() -> WalmartConfigBuilder {
        WalmartConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the LinkShare affiliate id, if configured.
    #[must_use]
    pub const fn link_share_id(&self) -> Option<&LinkShareId> {
        self.link_share_id.as_ref()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the transport timeout, if configured.
    ///
    /// This is handed to the HTTP transport unchanged; the client itself
    /// never times out a request.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify WalmartConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WalmartConfig>();
};

/// Builder for constructing [`WalmartConfig`] instances.
///
/// The only required field is `api_key`.
///
/// # Defaults
///
/// - `link_share_id`: `None`
/// - `base_url`: `http://api.walmartlabs.com/v1/`
/// - `timeout`: `None` (the transport default, which never times out)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct WalmartConfigBuilder {
    api_key: Option<ApiKey>,
    link_share_id: Option<LinkShareId>,
    base_url: Option<BaseUrl>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl WalmartConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the LinkShare affiliate id.
    ///
    /// Only [`Product::product_tracking_url`](crate::Product::product_tracking_url)
    /// needs it.
    #[must_use]
    pub fn link_share_id(mut self, id: LinkShareId) -> Self {
        self.link_share_id = Some(id);
        self
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the transport timeout for each request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`WalmartConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set.
    pub fn build(self) -> Result<WalmartConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(WalmartConfig {
            api_key,
            link_share_id: self.link_share_id,
            base_url: self.base_url.unwrap_or_default(),
            timeout: self.timeout,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
