//! HTTP client for Walmart Open API communication.
//!
//! This module provides the [`HttpClient`] type, which authenticates every
//! request with the configured API key and turns non-success status codes
//! into [`InvalidRequestError`]s.

use std::collections::HashMap;

use crate::clients::errors::InvalidRequestError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::WalmartConfig;
use crate::error::WalmartError;
use crate::params::{ResponseFormat, RichAttributes};

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Query parameter carrying the API key.
const API_KEY_PARAM: &str = "apiKey";

/// HTTP client for making requests to the Walmart Open API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - The `apiKey`, `format` and `richAttributes` parameters on every request
/// - Default headers including User-Agent
/// - Status code classification
///
/// Each call to [`request`](Self::request) performs exactly one round trip.
/// There are no retries, and no timeout beyond the one configured on the
/// transport.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. It holds no mutable state, so concurrent
/// requests from several tasks need no locking.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Immutable configuration (API key, base URL).
    config: WalmartConfig,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`WalmartError::Network`] if the underlying reqwest client
    /// cannot be created (e.g. TLS initialisation failure).
    pub fn new(config: WalmartConfig) -> Result<Self, WalmartError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}walmart-api v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            config,
            default_headers,
        })
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &WalmartConfig {
        &self.config
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full query sent for `request`.
    ///
    /// The request's own pairs come first. Any `format`, `apiKey` or
    /// `richAttributes` pair it carries is dropped, and the client's values
    /// for those three are appended last.
    #[must_use]
    pub fn query_for(&self, request: &HttpRequest) -> Vec<(String, String)> {
        let reserved = [API_KEY_PARAM, ResponseFormat::PARAM, RichAttributes::PARAM];

        let mut query: Vec<(String, String)> = request
            .query
            .iter()
            .filter(|(key, _)| !reserved.contains(&key.as_str()))
            .cloned()
            .collect();

        query.push((
            API_KEY_PARAM.to_string(),
            self.config.api_key().as_ref().to_string(),
        ));
        query.push((
            ResponseFormat::PARAM.to_string(),
            ResponseFormat::Json.as_str().to_string(),
        ));
        query.push((
            RichAttributes::PARAM.to_string(),
            request.rich_attributes.as_str().to_string(),
        ));
        query
    }

    /// Sends a GET request to the Walmart Open API.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [`WalmartError::Network`] if the request could not be sent or the
    ///   transport timed out
    /// - [`WalmartError::InvalidRequest`] for any status other than 200/201
    /// - [`WalmartError::UnexpectedResponse`] if a successful body is not JSON
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, WalmartError> {
        let url = self.config.base_url().join(&request.path);
        let query = self.query_for(&request);

        tracing::debug!(path = %request.path, "Sending request to Walmart API");

        let mut req_builder = self.client.get(&url).query(&query);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        tracing::debug!(path = %request.path, status = code, "Received response from Walmart API");

        // An undecodable body reads as `{}` until the status is known
        let (body, decode_error) = if body_text.trim().is_empty() {
            (serde_json::json!({}), None)
        } else {
            match serde_json::from_str(&body_text) {
                Ok(body) => (body, None),
                Err(e) => (serde_json::json!({}), Some(e)),
            }
        };

        let response = HttpResponse::new(code, res_headers, body);

        if !response.is_ok() {
            let error = InvalidRequestError::from_response(response.code, &response.body);
            tracing::warn!(
                path = %request.path,
                status = code,
                "Walmart API rejected request: {}",
                error.message
            );
            return Err(error.into());
        }

        if let Some(e) = decode_error {
            return Err(WalmartError::UnexpectedResponse {
                endpoint: request.path,
                reason: format!("body is not valid JSON: {e}"),
            });
        }

        Ok(response)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiKey;

    fn create_test_client() -> HttpClient {
        let config = WalmartConfig::builder()
            .api_key(ApiKey::new("test-api-key").unwrap())
            .build()
            .unwrap();
        HttpClient::new(config).unwrap()
    }

    fn value_of<'a>(query: &'a [(String, String)], key: &str) -> Vec<&'a str> {
        query
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = create_test_client();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("walmart-api v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = WalmartConfig::builder()
            .api_key(ApiKey::new("test-api-key").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_query_carries_key_format_and_rich_attributes() {
        let client = create_test_client();
        let request = HttpRequest::builder("trends").build().unwrap();

        let query = client.query_for(&request);
        assert_eq!(value_of(&query, "apiKey"), vec!["test-api-key"]);
        assert_eq!(value_of(&query, "format"), vec!["json"]);
        assert_eq!(value_of(&query, "richAttributes"), vec!["true"]);
    }

    #[test]
    fn test_caller_cannot_override_reserved_params() {
        let client = create_test_client();
        let request = HttpRequest::builder("search")
            .query_param("query", "ipod")
            .query_param("format", "xml")
            .query_param("apiKey", "someone-else")
            .query_param("richAttributes", "maybe")
            .rich_attributes(RichAttributes::Disabled)
            .build()
            .unwrap();

        let query = client.query_for(&request);
        assert_eq!(value_of(&query, "query"), vec!["ipod"]);
        assert_eq!(value_of(&query, "format"), vec!["json"]);
        assert_eq!(value_of(&query, "apiKey"), vec!["test-api-key"]);
        assert_eq!(value_of(&query, "richAttributes"), vec!["false"]);
    }

    #[test]
    fn test_queries_do_not_leak_between_requests() {
        let client = create_test_client();
        let first = HttpRequest::builder("search")
            .query_param("query", "tv")
            .query_param("facet.filter", "brand:Sony")
            .build()
            .unwrap();
        let second = HttpRequest::builder("search")
            .query_param("query", "radio")
            .build()
            .unwrap();

        let _ = client.query_for(&first);
        let query = client.query_for(&second);
        assert!(value_of(&query, "facet.filter").is_empty());
        assert_eq!(value_of(&query, "query"), vec!["radio"]);
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
