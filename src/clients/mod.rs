//! HTTP client types for Walmart Open API communication.
//!
//! This module provides the transport layer used by [`WalmartClient`]:
//! building GET requests, attaching the authentication and format
//! parameters, and mapping failed statuses to typed errors.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`WalmartClient`]: One async method per API capability
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`InvalidRequestError`]: A non-success answer from the API
//!
//! # Example
//!
//! ```rust,ignore
//! use walmart_api::{ApiKey, WalmartConfig};
//! use walmart_api::clients::{HttpClient, HttpRequest};
//!
//! let config = WalmartConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(config)?;
//! let request = HttpRequest::builder("trends").build()?;
//!
//! // Sends GET {base}/trends?apiKey=...&format=json&richAttributes=true
//! let response = client.request(request).await?;
//! ```
//!
//! # Failure Behavior
//!
//! Requests are sent exactly once. Any status other than 200 or 201 is
//! returned as [`InvalidRequestError`], whose message follows the form
//! `[Request failed] Walmart server answered with the following error: <phrase>. Status code: <code>`.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod walmart;

pub use errors::{InvalidRequestError, InvalidRequestKind};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

pub use walmart::{SpecialFeed, WalmartClient};
