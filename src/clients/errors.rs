//! Remote-side error types for the Walmart API client.
//!
//! A non-success status code from the API becomes an
//! [`InvalidRequestError`], classified by [`InvalidRequestKind`].
//!
//! # Example
//!
//! ```rust
//! use walmart_api::clients::{InvalidRequestError, InvalidRequestKind};
//!
//! let error = InvalidRequestError::from_status(404, None);
//! assert_eq!(error.kind, InvalidRequestKind::WrongEndpoint);
//! assert!(error.to_string().contains("Wrong endpoint"));
//! ```

use std::fmt;

use thiserror::Error;

/// Classification of a rejected request, one variant per status code the
/// API documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InvalidRequestKind {
    /// 400
    BadRequest,
    /// 403
    Forbidden,
    /// 404
    WrongEndpoint,
    /// 414
    RequestUriTooLong,
    /// 500
    InternalServerError,
    /// 502
    BadGateway,
    /// 503
    ServiceUnavailable,
    /// 504
    GatewayTimeout,
    /// Any other non-success status.
    RequestFailed,
}

impl InvalidRequestKind {
    /// Classifies an HTTP status code.
    #[must_use]
    pub const fn from_status(code: u16) -> Self {
        match code {
            400 => Self::BadRequest,
            403 => Self::Forbidden,
            404 => Self::WrongEndpoint,
            414 => Self::RequestUriTooLong,
            500 => Self::InternalServerError,
            502 => Self::BadGateway,
            503 => Self::ServiceUnavailable,
            504 => Self::GatewayTimeout,
            _ => Self::RequestFailed,
        }
    }

    /// Returns the fixed phrase used in error messages.
    #[must_use]
    pub const fn phrase(&self) -> &'static str {
        match self {
            Self::BadRequest => "Bad Request",
            Self::Forbidden => "Forbidden",
            Self::WrongEndpoint => "Wrong endpoint",
            Self::RequestUriTooLong => "Request URI too long",
            Self::InternalServerError => "Internal Server Error",
            Self::BadGateway => "Bad Gateway",
            Self::ServiceUnavailable => "Service Unavailable/ API maintenance",
            Self::GatewayTimeout => "Gateway Timeout",
            Self::RequestFailed => "Error",
        }
    }
}

impl fmt::Display for InvalidRequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}

/// Error returned when the API answers with a non-success status code.
///
/// The message has the form
/// `[Request failed] Walmart server answered with the following error: {phrase}. Status code: {code}`.
/// For 400 responses the phrase is followed by the first error detail from
/// the body, when there is one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct InvalidRequestError {
    /// The classification of the status code.
    pub kind: InvalidRequestKind,
    /// The HTTP status code of the response.
    pub code: u16,
    /// Human-readable message built from the fixed phrase table.
    pub message: String,
}

impl InvalidRequestError {
    /// Builds the error for a status code.
    ///
    /// `detail` is only used for 400 responses.
    #[must_use]
    pub fn from_status(code: u16, detail: Option<&str>) -> Self {
        let kind = InvalidRequestKind::from_status(code);
        let phrase = match (kind, detail) {
            (InvalidRequestKind::BadRequest, Some(detail)) => {
                format!("{} - {detail}", kind.phrase())
            }
            _ => kind.phrase().to_string(),
        };
        let message = format!(
            "[Request failed] Walmart server answered with the following error: {phrase}. Status code: {code}"
        );

        Self {
            kind,
            code,
            message,
        }
    }

    /// Builds the error from a response body, extracting `errors[0].message`
    /// for 400 responses.
    #[must_use]
    pub fn from_response(code: u16, body: &serde_json::Value) -> Self {
        let detail = body
            .get("errors")
            .and_then(|errors| errors.get(0))
            .and_then(|error| error.get("message"))
            .and_then(serde_json::Value::as_str);
        Self::from_status(code, detail)
    }
}
