//! # Walmart Open API Rust Client
//!
//! An async client for the Walmart Open API product endpoints, providing
//! type-safe configuration, validated request parameters and typed views
//! over the returned product and review records.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`WalmartConfig`] and [`WalmartConfigBuilder`]
//! - Validated newtypes for the API key, affiliate id and base URL
//! - Product lookup, search, recommendations, reviews, trends and curated feeds
//!   via [`WalmartClient`]
//! - Search parameter validation (page size, page number, category id)
//!   before any request is sent
//! - Read-only entity views ([`Product`], [`ProductReview`]) with lenient
//!   field coercion and HTML entity decoding
//! - Affiliate tracking URLs with the configured LinkShare id substituted
//!
//! ## Quick Start
//!
//! ```rust
//! use walmart_api::{ApiKey, LinkShareId, WalmartConfig, WalmartClient};
//!
//! let config = WalmartConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .link_share_id(LinkShareId::new("your-linkshare-id").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = WalmartClient::new(config).unwrap();
//! assert!(client.config().link_share_id().is_some());
//! ```
//!
//! ## Searching
//!
//! ```rust,ignore
//! use walmart_api::{SearchParams, SortKind, SortOrder};
//!
//! let params = SearchParams::new("ipod")
//!     .page(2)
//!     .num_items(5)
//!     .sort(SortKind::Price)
//!     .order(SortOrder::Asc);
//!
//! // Sends start=6&numItems=5; the page itself is never sent.
//! for product in client.search(params).await? {
//!     println!("{:?}: {:?}", product.name(), product.sale_price()?);
//! }
//! ```
//!
//! ## Reading Products
//!
//! ```rust
//! use serde_json::json;
//! use walmart_api::{ImageSize, Product};
//!
//! let product = Product::from_value(json!({
//!     "itemId": 12417832,
//!     "name": "Toys &amp; Games",
//!     "salePrice": 9.99,
//!     "imageEntities": [
//!         {"entityType": "SECONDARY", "largeImage": "b.jpg"},
//!         {"entityType": "PRIMARY", "largeImage": "a.jpg"}
//!     ]
//! }), None)
//! .unwrap();
//!
//! assert_eq!(product.name().as_deref(), Some("Toys & Games"));
//! assert_eq!(product.sale_price().unwrap(), Some(9.99));
//! assert_eq!(
//!     product.images_by_size(ImageSize::Large),
//!     Some(vec!["a.jpg".to_string(), "b.jpg".to_string()])
//! );
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and parameters validate before any request
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **One request per call**: No caching, no retries

pub mod clients;
pub mod config;
pub mod error;
pub mod params;
pub mod resources;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, BaseUrl, LinkShareId, WalmartConfig, WalmartConfigBuilder};
pub use error::{ConfigError, InvalidParameterError, ParseError, WalmartError};

// Re-export client types
pub use clients::{InvalidRequestError, InvalidRequestKind, SpecialFeed, WalmartClient};

// Re-export parameter types
pub use params::{CategoryId, ResponseGroup, RichAttributes, SearchParams, SortKind, SortOrder};

// Re-export entity views
pub use resources::{Dimensions, ImageEntity, ImageSize, Product, ProductReview, StockStatus};
