//! HTTP response types for the Walmart API client.

use std::collections::HashMap;

/// An HTTP response from the Walmart Open API.
///
/// Headers are lower-cased and may have multiple values. The body is always
/// JSON; an empty or undecodable body on an error response becomes `{}`.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` for the status codes the API answers on success (200 and 201).
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self.code, 200 | 201)
    }
}
