//! High-level client for the Walmart Open API.
//!
//! This module provides [`WalmartClient`], which turns the product
//! endpoints of the API into typed async operations:
//!
//! | Operation | Endpoint | Returns |
//! |-----------|----------|---------|
//! | [`WalmartClient::product_lookup`] | `items/{id}` | [`Product`](crate::Product) |
//! | [`WalmartClient::search`] | `search` | `Vec<Product>` |
//! | [`WalmartClient::product_recommendations`] | `nbp` | `Vec<Product>` |
//! | [`WalmartClient::post_browsed_products`] | `postbrowse` | `Vec<Product>` |
//! | [`WalmartClient::product_reviews`] | `reviews/{id}` | `Vec<ProductReview>` |
//! | [`WalmartClient::trending_products`] | `trends` | `Vec<Product>` |
//! | [`WalmartClient::bestseller_products`] | `feeds/bestsellers` | `Vec<Product>` |
//! | [`WalmartClient::clearance_products`] | `feeds/clearance` | `Vec<Product>` |
//! | [`WalmartClient::special_buy_products`] | `feeds/specialbuy` | `Vec<Product>` |
//!
//! Every request carries the API key, `format=json` and the
//! `richAttributes` switch. Non-success statuses surface as
//! [`InvalidRequestError`](crate::clients::InvalidRequestError).

mod client;

pub use client::{SpecialFeed, WalmartClient};
