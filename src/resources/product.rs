//! The product entity view.
//!
//! [`Product`] wraps one item record from the lookup, search, recommendation,
//! trending and special-feed endpoints. Every accessor maps a domain concept
//! onto a payload key and resolves to `None` when the key is absent.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::LinkShareId;
use crate::error::{ConfigError, InvalidParameterError, ParseError};
use crate::resources::image::{ordered_urls, ImageEntity, ImageSize};
use crate::resources::ResponseHandler;

/// Placeholder in `productTrackingUrl` replaced by the affiliate id.
pub const LINK_SHARE_PLACEHOLDER: &str = "|LSNID|";

/// Online stock state of an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    /// In stock.
    #[serde(rename = "Available")]
    Available,
    /// Can go out of stock in the near future; refresh more often.
    #[serde(rename = "Limited Supply")]
    LimitedSupply,
    /// Can go out of stock very quickly.
    #[serde(rename = "Last few items")]
    LastFewItems,
    /// Out of stock.
    #[serde(rename = "Not available")]
    NotAvailable,
}

impl StockStatus {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::LimitedSupply => "Limited Supply",
            Self::LastFewItems => "Last few items",
            Self::NotAvailable => "Not available",
        }
    }

    /// Parses a wire value. Matching ignores ASCII case.
    #[must_use]
    pub fn from_wire(value: &str) -> Option<Self> {
        [
            Self::Available,
            Self::LimitedSupply,
            Self::LastFewItems,
            Self::NotAvailable,
        ]
        .into_iter()
        .find(|status| status.as_str().eq_ignore_ascii_case(value.trim()))
    }

    /// Returns `true` if the item can currently be ordered.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        !matches!(self, Self::NotAvailable)
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical dimensions parsed from the `dimensions` field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// First component.
    pub length: f64,
    /// Second component.
    pub width: f64,
    /// Third component.
    pub height: f64,
}

impl Dimensions {
    /// Parses a string such as `"2.0 x 3.0 x 4.0"`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] unless the value splits on `x` into exactly
    /// three numeric tokens.
    pub fn parse(value: &str) -> Result<Self, ParseError> {
        let error = || ParseError::new("dimensions", "three 'x'-separated numbers", value);

        let components = value
            .split(['x', 'X'])
            .map(|token| token.trim().parse::<f64>().map_err(|_| error()))
            .collect::<Result<Vec<_>, _>>()?;

        match components.as_slice() {
            [length, width, height] => Ok(Self {
                length: *length,
                width: *width,
                height: *height,
            }),
            _ => Err(error()),
        }
    }
}

/// Read-only view over one product record.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use walmart_api::{LinkShareId, Product};
///
/// let product = Product::from_value(
///     json!({
///         "itemId": 12417832,
///         "name": "Apple iPod &amp; Dock",
///         "salePrice": 249.0,
///         "dimensions": "2.0 x 3.0 x 4.0",
///         "productTrackingUrl": "http://linksynergy.walmart.com/fs-bin/click?id=|LSNID|",
///     }),
///     Some(LinkShareId::new("ABC123").unwrap()),
/// )
/// .unwrap();
///
/// assert_eq!(product.item_id().as_deref(), Some("12417832"));
/// assert_eq!(product.name().as_deref(), Some("Apple iPod & Dock"));
/// assert_eq!(product.height().unwrap(), Some(4.0));
/// assert_eq!(
///     product.product_tracking_url().unwrap().as_deref(),
///     Some("http://linksynergy.walmart.com/fs-bin/click?id=ABC123")
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    handler: ResponseHandler,
    link_share_id: Option<LinkShareId>,
}

// Verify Product is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Product>();
};

impl Product {
    /// Creates a view over a product record.
    #[must_use]
    pub fn new(payload: Map<String, Value>, link_share_id: Option<LinkShareId>) -> Self {
        Self {
            handler: ResponseHandler::new(payload),
            link_share_id,
        }
    }

    /// Creates a view over a JSON value, returning `None` unless it is an object.
    #[must_use]
    pub fn from_value(value: Value, link_share_id: Option<LinkShareId>) -> Option<Self> {
        ResponseHandler::from_value(value).map(|handler| Self {
            handler,
            link_share_id,
        })
    }

    /// Item id.
    #[must_use]
    pub fn item_id(&self) -> Option<String> {
        self.handler.get_string("itemId")
    }

    /// Id of the base version of this item, for variants.
    #[must_use]
    pub fn parent_item_id(&self) -> Option<String> {
        self.handler.get_string("parentItemId")
    }

    /// Standard name of the item.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.handler.get_text("name")
    }

    /// Manufacturer suggested retail price.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the field is not numeric.
    pub fn msrp(&self) -> Result<Option<f64>, ParseError> {
        self.handler.get_float("msrp")
    }

    /// Selling price in USD.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the field is not numeric.
    pub fn sale_price(&self) -> Result<Option<f64>, ParseError> {
        self.handler.get_float("salePrice")
    }

    /// Universal product code.
    #[must_use]
    pub fn upc(&self) -> Option<String> {
        self.handler.get_string("upc")
    }

    /// Breadcrumb of the item's category, e.g. `Electronics/iPods and MP3 Players`.
    #[must_use]
    pub fn category_path(&self) -> Option<String> {
        self.handler.get_string("categoryPath")
    }

    /// Category node id, e.g. `3944_96469`.
    #[must_use]
    pub fn category_node(&self) -> Option<String> {
        self.handler.get_string("categoryNode")
    }

    /// Short description, HTML entities decoded.
    #[must_use]
    pub fn short_description(&self) -> Option<String> {
        self.handler.get_text("shortDescription")
    }

    /// Long description, HTML entities decoded.
    #[must_use]
    pub fn long_description(&self) -> Option<String> {
        self.handler.get_text("longDescription")
    }

    /// Brand name.
    #[must_use]
    pub fn brand_name(&self) -> Option<String> {
        self.handler.get_string("brandName")
    }

    /// URL of the thumbnail image.
    #[must_use]
    pub fn thumbnail_image(&self) -> Option<String> {
        self.handler.get_string("thumbnailImage")
    }

    /// URL of the medium image.
    #[must_use]
    pub fn medium_image(&self) -> Option<String> {
        self.handler.get_string("mediumImage")
    }

    /// URL of the large image.
    #[must_use]
    pub fn large_image(&self) -> Option<String> {
        self.handler.get_string("largeImage")
    }

    /// Every large image URL, primary image first.
    #[must_use]
    pub fn images(&self) -> Option<Vec<String>> {
        self.images_by_size(ImageSize::Large)
    }

    /// Affiliate deep link, with the configured LinkShare id substituted
    /// for the `|LSNID|` placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingLinkShareId`] if the client was built
    /// without a LinkShare id, whether or not the payload has a tracking URL.
    pub fn product_tracking_url(&self) -> Result<Option<String>, ConfigError> {
        let link_share_id = self
            .link_share_id
            .as_ref()
            .ok_or(ConfigError::MissingLinkShareId)?;

        Ok(self
            .handler
            .get_string("productTrackingUrl")
            .map(|url| url.replace(LINK_SHARE_PLACEHOLDER, link_share_id.as_ref())))
    }

    /// Size attribute.
    #[must_use]
    pub fn size(&self) -> Option<String> {
        self.handler.get_string("size")
    }

    /// Color attribute.
    #[must_use]
    pub fn color(&self) -> Option<String> {
        self.handler.get_string("color")
    }

    /// Model number.
    #[must_use]
    pub fn model_number(&self) -> Option<String> {
        self.handler.get_string("modelNumber")
    }

    /// Product page URL on walmart.com.
    #[must_use]
    pub fn product_url(&self) -> Option<String> {
        self.handler.get_string("productUrl")
    }

    /// Whether the item can be bought online.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the field is not a boolean.
    pub fn available_online(&self) -> Result<Option<bool>, ParseError> {
        self.handler.get_bool("availableOnline")
    }

    /// Online stock state.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the value is not one of the four known states.
    pub fn stock(&self) -> Result<Option<StockStatus>, ParseError> {
        self.handler
            .get_string("stock")
            .map(|value| {
                StockStatus::from_wire(&value)
                    .ok_or_else(|| ParseError::new("stock", "stock status", value))
            })
            .transpose()
    }

    /// Average customer rating.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the field is not numeric.
    pub fn customer_rating(&self) -> Result<Option<f64>, ParseError> {
        self.handler.get_float("customerRating")
    }

    /// Number of customer reviews.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the field is not an integer.
    pub fn num_reviews(&self) -> Result<Option<i64>, ParseError> {
        self.handler.get_int("numReviews")
    }

    /// Shipping weight.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the field is not numeric.
    pub fn weight(&self) -> Result<Option<f64>, ParseError> {
        self.handler.get_float("weight")
    }

    /// All three dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if `dimensions` is present but malformed.
    pub fn dimensions(&self) -> Result<Option<Dimensions>, ParseError> {
        self.handler
            .get_string("dimensions")
            .map(|value| Dimensions::parse(&value))
            .transpose()
    }

    /// Length, the first component of `dimensions`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if `dimensions` is present but malformed.
    pub fn length(&self) -> Result<Option<f64>, ParseError> {
        Ok(self.dimensions()?.map(|d| d.length))
    }

    /// Width, the second component of `dimensions`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if `dimensions` is present but malformed.
    pub fn width(&self) -> Result<Option<f64>, ParseError> {
        Ok(self.dimensions()?.map(|d| d.width))
    }

    /// Height, the third component of `dimensions`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if `dimensions` is present but malformed.
    pub fn height(&self) -> Result<Option<f64>, ParseError> {
        Ok(self.dimensions()?.map(|d| d.height))
    }

    /// Raw value of any field, as a string.
    ///
    /// Numbers, booleans and nested values are rendered as JSON text; parse
    /// them yourself.
    #[must_use]
    pub fn get_attribute(&self, name: &str) -> Option<String> {
        self.handler.get_string(name)
    }

    /// The decoded `imageEntities` list.
    ///
    /// Entries that are not objects are skipped.
    #[must_use]
    pub fn image_entities(&self) -> Option<Vec<ImageEntity>> {
        let entities = self.handler.get_raw("imageEntities")?.as_array()?;
        Some(
            entities
                .iter()
                .filter_map(|value| match ImageEntity::deserialize(value) {
                    Ok(entity) => Some(entity),
                    Err(e) => {
                        tracing::trace!(error = %e, "Skipping malformed image entity");
                        None
                    }
                })
                .collect(),
        )
    }

    /// Image URLs of one size, primary image first, then the rest in
    /// payload order.
    ///
    /// `None` if the payload has no (or an empty) `imageEntities` list.
    #[must_use]
    pub fn images_by_size(&self, size: ImageSize) -> Option<Vec<String>> {
        let entities = self
            .image_entities()
            .filter(|entities| !entities.is_empty())?;
        Some(ordered_urls(&entities, size))
    }

    /// String-keyed form of [`images_by_size`](Self::images_by_size).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameterError::InvalidImageSize`] unless `size` is
    /// `thumbnail`, `medium` or `large`.
    pub fn get_images_by_size(
        &self,
        size: &str,
    ) -> Result<Option<Vec<String>>, InvalidParameterError> {
        let size: ImageSize = size.parse()?;
        Ok(self.images_by_size(size))
    }
}
