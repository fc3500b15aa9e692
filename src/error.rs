//! Error types for the Walmart API client.
//!
//! This module contains the closed error taxonomy used throughout the crate.
//! Leaf errors are narrow so accessors can return exactly what they may
//! raise, and [`WalmartError`] unifies them for the facade operations.
//!
//! # Error Handling
//!
//! - [`ConfigError`]: configuration validation, and accessors that need
//!   configuration that was never supplied (the affiliate id)
//! - [`InvalidParameterError`]: caller input rejected before any request is sent
//! - [`InvalidRequestError`](crate::clients::InvalidRequestError): the remote
//!   API rejected the call
//! - [`ParseError`]: a field is present in the payload but cannot be coerced
//!
//! # Example
//!
//! ```rust
//! use walmart_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

use crate::clients::InvalidRequestError;

/// Errors that can occur during client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Walmart Open API key.")]
    EmptyApiKey,

    /// LinkShare id cannot be empty when provided.
    #[error("LinkShare ID cannot be empty. Omit it entirely if you do not have one.")]
    EmptyLinkShareId,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a valid URL with scheme (e.g., 'http://api.walmartlabs.com/v1/').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// An accessor needs the affiliate id but none was configured.
    #[error("No LinkShare ID specified. When retrieving the product tracking url, you must set link_share_id when creating the Walmart client.")]
    MissingLinkShareId,
}

/// Caller-supplied arguments that fail local validation.
///
/// These are always raised before a request is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidParameterError {
    /// `num_items` is above the page size the API allows.
    #[error("Number of items must not exceed {max}, got {value}")]
    TooManyItems {
        /// The rejected page size.
        value: u32,
        /// The largest accepted page size.
        max: u32,
    },

    /// Page numbers start at 1.
    #[error("Page should be a positive numeric value, got {value}")]
    InvalidPage {
        /// The rejected page number.
        value: u32,
    },

    /// The category id is not an integer.
    #[error(
        "Category must be numeric, got '{value}'. See Walmart Taxonomy API for more information."
    )]
    InvalidCategory {
        /// The rejected input, as given.
        value: String,
    },

    /// The image size is not one of `thumbnail`, `medium` or `large`.
    #[error("The image size should be 'thumbnail', 'medium' or 'large', got '{value}'")]
    InvalidImageSize {
        /// The rejected size.
        value: String,
    },

    /// An item id path segment is empty.
    #[error("Item id cannot be empty")]
    EmptyItemId,

    /// The search query is empty.
    #[error("Search query cannot be empty")]
    EmptyQuery,
}

impl From<std::convert::Infallible> for InvalidParameterError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

/// A field is present in the payload but cannot be coerced to the requested type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Field '{field}' cannot be parsed as {expected}: {value}")]
pub struct ParseError {
    /// The payload key that failed to parse.
    pub field: String,
    /// What the field was expected to hold (e.g. "float").
    pub expected: &'static str,
    /// The offending value, rendered as JSON.
    pub value: String,
}

impl ParseError {
    pub(crate) fn new(
        field: impl Into<String>,
        expected: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            expected,
            value: value.into(),
        }
    }
}

/// Unified error type for every facade operation.
///
/// # Example
///
/// ```rust,ignore
/// use walmart_api::WalmartError;
///
/// match client.search(params).await {
///     Ok(products) => println!("{} products", products.len()),
///     Err(WalmartError::InvalidParameter(e)) => eprintln!("bad input: {e}"),
///     Err(WalmartError::InvalidRequest(e)) => eprintln!("API error {}: {}", e.code, e),
///     Err(e) => eprintln!("request failed: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum WalmartError {
    /// Configuration is invalid or incomplete.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A caller-supplied argument failed validation.
    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameterError),

    /// The remote API rejected the request.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),

    /// A payload field could not be coerced.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Network or connection error, including transport timeouts.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A successful response did not have the expected shape.
    #[error("Unexpected response from {endpoint}: {reason}")]
    UnexpectedResponse {
        /// The endpoint path that answered.
        endpoint: String,
        /// What was wrong with the body.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_error_message() {
        let message = ConfigError::EmptyApiKey.to_string();
        assert!(message.contains("API key cannot be empty"));
        assert!(message.contains("Walmart Open API key"));
    }

    #[test]
    fn test_missing_link_share_id_mentions_tracking_url() {
        let message = ConfigError::MissingLinkShareId.to_string();
        assert!(message.contains("No LinkShare ID specified"));
        assert!(message.contains("tracking url"));
    }

    #[test]
    fn test_too_many_items_error_message() {
        let error = InvalidParameterError::TooManyItems { value: 30, max: 25 };
        assert_eq!(
            error.to_string(),
            "Number of items must not exceed 25, got 30"
        );
    }

    #[test]
    fn test_parse_error_message_includes_field_and_value() {
        let error = ParseError::new("salePrice", "float", "\"cheap\"");
        let message = error.to_string();
        assert!(message.contains("salePrice"));
        assert!(message.contains("float"));
        assert!(message.contains("cheap"));
    }

    #[test]
    fn test_leaf_errors_convert_into_walmart_error() {
        let error: WalmartError = ConfigError::MissingLinkShareId.into();
        assert!(matches!(error, WalmartError::Config(_)));

        let error: WalmartError = InvalidParameterError::EmptyItemId.into();
        assert!(matches!(error, WalmartError::InvalidParameter(_)));

        let error: WalmartError = ParseError::new("numReviews", "integer", "1.x").into();
        assert!(matches!(error, WalmartError::Parse(_)));
    }

    #[test]
    fn test_error_implements_std_error() {
        let _: &dyn std::error::Error = &ConfigError::EmptyApiKey;
        let _: &dyn std::error::Error = &InvalidParameterError::EmptyQuery;
    }
}
