//! HTTP request types for the Walmart API client.
//!
//! This module provides the [`HttpRequest`] type and its builder. Every
//! Walmart Open API call is a GET with query parameters, so a request is an
//! endpoint path, a list of query pairs and the `richAttributes` switch.

use crate::error::InvalidParameterError;
use crate::params::RichAttributes;

/// A GET request to a Walmart Open API endpoint.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use walmart_api::clients::HttpRequest;
///
/// let request = HttpRequest::builder("nbp")
///     .query_param("itemId", "12417832")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.path, "nbp");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The path (relative to the base URL) for this request.
    pub path: String,
    /// Query parameters, in the order they are sent.
    pub query: Vec<(String, String)>,
    /// The `richAttributes` switch sent with this request.
    pub rich_attributes: RichAttributes,
}

impl HttpRequest {
    /// Creates a new builder for a request to `path`.
    #[must_use]
    pub fn builder(path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(path)
    }

    /// Creates a builder for `{collection}/{item_id}`, percent-encoding the id.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameterError::EmptyItemId`] if the id is blank.
    pub fn item_builder(
        collection: &str,
        item_id: &str,
    ) -> Result<HttpRequestBuilder, InvalidParameterError> {
        let item_id = item_id.trim();
        if item_id.is_empty() {
            return Err(InvalidParameterError::EmptyItemId);
        }
        Ok(HttpRequestBuilder::new(format!(
            "{collection}/{}",
            urlencoding::encode(item_id)
        )))
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    path: String,
    query: Vec<(String, String)>,
    rich_attributes: RichAttributes,
}

impl HttpRequestBuilder {
    fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
            rich_attributes: RichAttributes::default(),
        }
    }

    /// Appends query parameters.
    #[must_use]
    pub fn query(mut self, query: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query.extend(query);
        self
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Sets the `richAttributes` switch (default: enabled).
    #[must_use]
    pub const fn rich_attributes(mut self, rich: RichAttributes) -> Self {
        self.rich_attributes = rich;
        self
    }

    /// Builds the [`HttpRequest`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameterError::EmptyItemId`] if the path is empty.
    pub fn build(self) -> Result<HttpRequest, InvalidParameterError> {
        if self.path.trim_matches('/').is_empty() {
            return Err(InvalidParameterError::EmptyItemId);
        }
        Ok(HttpRequest {
            path: self.path,
            query: self.query,
            rich_attributes: self.rich_attributes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_creates_request_with_defaults() {
        let request = HttpRequest::builder("trends").build().unwrap();

        assert_eq!(request.path, "trends");
        assert!(request.query.is_empty());
        assert_eq!(request.rich_attributes, RichAttributes::Enabled);
    }

    #[test]
    fn test_builder_keeps_query_order() {
        let brand = vec![("facet.filter".to_string(), "brand:Apple".to_string())];
        let request = HttpRequest::builder("search")
            .query_param("query", "ipod")
            .query(brand)
            .query_param("facet.filter", "color:Red")
            .build()
            .unwrap();

        assert_eq!(
            request.query,
            vec![
                ("query".to_string(), "ipod".to_string()),
                ("facet.filter".to_string(), "brand:Apple".to_string()),
                ("facet.filter".to_string(), "color:Red".to_string()),
            ]
        );
    }

    #[test]
    fn test_item_builder_encodes_id() {
        let request = HttpRequest::item_builder("items", "12 34/5")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(request.path, "items/12%2034%2F5");
    }

    #[test]
    fn test_item_builder_rejects_blank_id() {
        assert!(matches!(
            HttpRequest::item_builder("reviews", "  "),
            Err(InvalidParameterError::EmptyItemId)
        ));
    }

    #[test]
    fn test_rich_attributes_override() {
        let request = HttpRequest::builder("items/1")
            .rich_attributes(RichAttributes::Disabled)
            .build()
            .unwrap();
        assert_eq!(request.rich_attributes.as_str(), "false");
    }
}
