//! Walmart Open API facade.
//!
//! This module provides [`WalmartClient`], one async method per remote
//! capability. Each method validates its arguments, issues exactly one GET
//! through [`HttpClient`], and wraps the decoded records in entity views.

use std::fmt;

use serde_json::{Map, Value};

use crate::clients::{HttpClient, HttpRequest};
use crate::config::WalmartConfig;
use crate::error::{InvalidParameterError, WalmartError};
use crate::params::{CategoryId, RichAttributes, SearchParams};
use crate::resources::{Product, ProductReview};

/// The category-scoped curated feeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpecialFeed {
    /// `feeds/bestsellers`
    Bestsellers,
    /// `feeds/clearance`
    Clearance,
    /// `feeds/specialbuy`
    SpecialBuy,
}

impl SpecialFeed {
    /// Returns the endpoint path, relative to the base URL.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Bestsellers => "feeds/bestsellers",
            Self::Clearance => "feeds/clearance",
            Self::SpecialBuy => "feeds/specialbuy",
        }
    }
}

impl fmt::Display for SpecialFeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Client for the Walmart Open API product endpoints.
///
/// Holds only immutable configuration, so a single client can be shared
/// between tasks (e.g. behind an `Arc`) without locking. Every operation
/// is one round trip; nothing is cached or retried.
///
/// # Example
///
/// ```rust,ignore
/// use walmart_api::{ApiKey, LinkShareId, SearchParams, WalmartClient, WalmartConfig};
///
/// let config = WalmartConfig::builder()
///     .api_key(ApiKey::new("your-api-key")?)
///     .link_share_id(LinkShareId::new("your-linkshare-id")?)
///     .build()?;
/// let client = WalmartClient::new(config)?;
///
/// let product = client.product_lookup("12417832").await?;
/// println!("{:?} at {:?}", product.name(), product.sale_price()?);
///
/// let results = client.search(SearchParams::new("ipod").page(2).num_items(5)).await?;
/// let bestsellers = client.bestseller_products(3944).await?;
/// ```
#[derive(Debug)]
pub struct WalmartClient {
    http_client: HttpClient,
}

// Verify WalmartClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WalmartClient>();
};

impl WalmartClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns [`WalmartError::Network`] if the HTTP transport cannot be created.
    pub fn new(config: WalmartConfig) -> Result<Self, WalmartError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
        })
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &WalmartConfig {
        self.http_client.config()
    }

    /// Looks up a single item by id, with rich attributes.
    ///
    /// # Errors
    ///
    /// Returns [`WalmartError`] if the id is blank, the request fails, or
    /// the body is not an item record.
    pub async fn product_lookup(&self, item_id: &str) -> Result<Product, WalmartError> {
        self.product_lookup_with(item_id, RichAttributes::Enabled)
            .await
    }

    /// Looks up a single item by id, choosing whether rich attributes are returned.
    ///
    /// # Errors
    ///
    /// Returns [`WalmartError`] if the id is blank, the request fails, or
    /// the body is not an item record.
    pub async fn product_lookup_with(
        &self,
        item_id: &str,
        rich_attributes: impl Into<RichAttributes>,
    ) -> Result<Product, WalmartError> {
        let request = HttpRequest::item_builder("items", item_id)?
            .rich_attributes(rich_attributes.into())
            .build()?;
        let path = request.path.clone();

        let response = self.http_client.request(request).await?;
        match response.body {
            Value::Object(payload) => Ok(self.product(payload)),
            other => Err(unexpected(
                &path,
                &format!("expected an item object, got {}", kind_of(&other)),
            )),
        }
    }

    /// Searches the catalogue.
    ///
    /// Results keep the order the API returned them in.
    ///
    /// # Errors
    ///
    /// Returns [`WalmartError::InvalidParameter`] before any request is sent
    /// if the parameters fail validation, or another [`WalmartError`] if the
    /// request fails.
    pub async fn search(&self, params: SearchParams) -> Result<Vec<Product>, WalmartError> {
        let request = HttpRequest::builder("search")
            .query(params.to_query()?)
            .rich_attributes(params.rich_attributes_value())
            .build()?;
        self.fetch_products(request, Some("items")).await
    }

    /// Items frequently bought after viewing `item_id`, most relevant first.
    ///
    /// The API returns at most 10 items.
    ///
    /// # Errors
    ///
    /// Returns [`WalmartError`] if the id is blank or the request fails.
    pub async fn product_recommendations(
        &self,
        item_id: &str,
    ) -> Result<Vec<Product>, WalmartError> {
        let request = Self::item_query_request("nbp", item_id)?;
        self.fetch_products(request, None).await
    }

    /// Items customers browsed after viewing `item_id`, most relevant first.
    ///
    /// The API returns at most 10 items.
    ///
    /// # Errors
    ///
    /// Returns [`WalmartError`] if the id is blank or the request fails.
    pub async fn post_browsed_products(&self, item_id: &str) -> Result<Vec<Product>, WalmartError> {
        let request = Self::item_query_request("postbrowse", item_id)?;
        self.fetch_products(request, None).await
    }

    /// Customer reviews of an item.
    ///
    /// # Errors
    ///
    /// Returns [`WalmartError`] if the id is blank or the request fails.
    pub async fn product_reviews(&self, item_id: &str) -> Result<Vec<ProductReview>, WalmartError> {
        let request = HttpRequest::item_builder("reviews", item_id)?.build()?;
        let records = self.fetch_records(request, Some("reviews")).await?;
        Ok(records.into_iter().map(ProductReview::new).collect())
    }

    /// Items currently trending on walmart.com.
    ///
    /// # Errors
    ///
    /// Returns [`WalmartError`] if the request fails.
    pub async fn trending_products(&self) -> Result<Vec<Product>, WalmartError> {
        let request = HttpRequest::builder("trends").build()?;
        self.fetch_products(request, Some("items")).await
    }

    /// Best sellers in a category.
    ///
    /// # Errors
    ///
    /// Returns [`WalmartError::InvalidParameter`] before any request is sent
    /// if `category` is not an integer id, or another [`WalmartError`] if
    /// the request fails.
    pub async fn bestseller_products<C>(&self, category: C) -> Result<Vec<Product>, WalmartError>
    where
        C: TryInto<CategoryId>,
        C::Error: Into<InvalidParameterError>,
    {
        self.special_feed_products(SpecialFeed::Bestsellers, category)
            .await
    }

    /// Clearance items in a category.
    ///
    /// # Errors
    ///
    /// Same as [`bestseller_products`](Self::bestseller_products).
    pub async fn clearance_products<C>(&self, category: C) -> Result<Vec<Product>, WalmartError>
    where
        C: TryInto<CategoryId>,
        C::Error: Into<InvalidParameterError>,
    {
        self.special_feed_products(SpecialFeed::Clearance, category)
            .await
    }

    /// Special-buy items in a category.
    ///
    /// # Errors
    ///
    /// Same as [`bestseller_products`](Self::bestseller_products).
    pub async fn special_buy_products<C>(&self, category: C) -> Result<Vec<Product>, WalmartError>
    where
        C: TryInto<CategoryId>,
        C::Error: Into<InvalidParameterError>,
    {
        self.special_feed_products(SpecialFeed::SpecialBuy, category)
            .await
    }

    /// Items of any special feed in a category.
    ///
    /// # Errors
    ///
    /// Same as [`bestseller_products`](Self::bestseller_products).
    pub async fn special_feed_products<C>(
        &self,
        feed: SpecialFeed,
        category: C,
    ) -> Result<Vec<Product>, WalmartError>
    where
        C: TryInto<CategoryId>,
        C::Error: Into<InvalidParameterError>,
    {
        let category: CategoryId = category
            .try_into()
            .map_err(|e| WalmartError::InvalidParameter(e.into()))?;

        let request = HttpRequest::builder(feed.path())
            .query_param(CategoryId::PARAM, category.to_string())
            .build()?;
        self.fetch_products(request, Some("items")).await
    }

    fn item_query_request(path: &str, item_id: &str) -> Result<HttpRequest, WalmartError> {
        let item_id = item_id.trim();
        if item_id.is_empty() {
            return Err(InvalidParameterError::EmptyItemId.into());
        }
        Ok(HttpRequest::builder(path)
            .query_param("itemId", item_id)
            .build()?)
    }

    fn product(&self, payload: Map<String, Value>) -> Product {
        Product::new(payload, self.config().link_share_id().cloned())
    }

    async fn fetch_products(
        &self,
        request: HttpRequest,
        list_key: Option<&str>,
    ) -> Result<Vec<Product>, WalmartError> {
        let records = self.fetch_records(request, list_key).await?;
        Ok(records
            .into_iter()
            .map(|payload| self.product(payload))
            .collect())
    }

    /// Sends the request and extracts the list of records from the body.
    ///
    /// With a `list_key`, the body must be an object and the list is read
    /// from that key; a missing key means an empty result set. Without one,
    /// the body itself is the list, and an object body (the API's "nothing
    /// found" answer) means an empty result set.
    async fn fetch_records(
        &self,
        request: HttpRequest,
        list_key: Option<&str>,
    ) -> Result<Vec<Map<String, Value>>, WalmartError> {
        let path = request.path.clone();
        let response = self.http_client.request(request).await?;

        let list = match (list_key, response.body) {
            (Some(key), Value::Object(mut body)) => body.remove(key).unwrap_or(Value::Null),
            (Some(key), other) => {
                return Err(unexpected(
                    &path,
                    &format!("expected an object with '{key}', got {}", kind_of(&other)),
                ))
            }
            (None, Value::Object(_)) => {
                tracing::debug!(path = %path, "No records in response");
                Value::Null
            }
            (None, other) => other,
        };

        match list {
            Value::Null => Ok(Vec::new()),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::Object(record) => Ok(record),
                    other => Err(unexpected(
                        &path,
                        &format!("expected record objects, got {}", kind_of(&other)),
                    )),
                })
                .collect(),
            other => Err(unexpected(
                &path,
                &format!("expected a list of records, got {}", kind_of(&other)),
            )),
        }
    }
}

fn unexpected(endpoint: &str, reason: &str) -> WalmartError {
    WalmartError::UnexpectedResponse {
        endpoint: endpoint.to_string(),
        reason: reason.to_string(),
    }
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
