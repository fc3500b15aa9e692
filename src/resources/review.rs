//! The product review entity view.

use chrono::{DateTime, NaiveDateTime};
use serde_json::{Map, Value};

use crate::error::ParseError;
use crate::resources::ResponseHandler;

/// Read-only view over one review record from the reviews endpoint.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use walmart_api::ProductReview;
///
/// let review = ProductReview::from_value(json!({
///     "reviewer": "jsmith",
///     "reviewText": "Works &amp; sounds great",
///     "overallRating": {"label": "Overall", "rating": "5"},
///     "upVotes": 3,
/// }))
/// .unwrap();
///
/// assert_eq!(review.review().as_deref(), Some("Works & sounds great"));
/// assert_eq!(review.rating().unwrap(), Some(5));
/// assert_eq!(review.down_votes().unwrap(), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ProductReview {
    handler: ResponseHandler,
}

impl ProductReview {
    /// Creates a view over a review record.
    #[must_use]
    pub const fn new(payload: Map<String, Value>) -> Self {
        Self {
            handler: ResponseHandler::new(payload),
        }
    }

    /// Creates a view over a JSON value, returning `None` unless it is an object.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        ResponseHandler::from_value(value).map(|handler| Self { handler })
    }

    /// Name or alias of the reviewer.
    #[must_use]
    pub fn reviewer(&self) -> Option<String> {
        self.handler.get_string("reviewer")
    }

    /// Full review text, HTML entities decoded.
    #[must_use]
    pub fn review(&self) -> Option<String> {
        self.handler.get_text("reviewText")
    }

    /// Submission date as sent by the API.
    #[must_use]
    pub fn date(&self) -> Option<String> {
        self.handler.get_text("submissionTime")
    }

    /// Submission date, parsed.
    ///
    /// Accepts RFC 3339 timestamps (the offset is dropped after conversion
    /// to UTC) and offset-less `YYYY-MM-DDTHH:MM:SS` timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if `submissionTime` is present but in neither format.
    pub fn submitted_at(&self) -> Result<Option<NaiveDateTime>, ParseError> {
        self.date()
            .map(|date| {
                DateTime::parse_from_rfc3339(&date)
                    .map(|parsed| parsed.naive_utc())
                    .or_else(|_| NaiveDateTime::parse_from_str(&date, "%Y-%m-%dT%H:%M:%S%.f"))
                    .map_err(|_| ParseError::new("submissionTime", "timestamp", date.clone()))
            })
            .transpose()
    }

    /// Review title, HTML entities decoded.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        self.handler.get_text("title")
    }

    /// Number of readers who found the review helpful.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the field is not an integer.
    pub fn up_votes(&self) -> Result<Option<i64>, ParseError> {
        self.handler.get_int("upVotes")
    }

    /// Number of readers who did not find the review helpful.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the field is not an integer.
    pub fn down_votes(&self) -> Result<Option<i64>, ParseError> {
        self.handler.get_int("downVotes")
    }

    /// Overall rating given by the reviewer, from `overallRating.rating`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the rating is present but not an integer.
    pub fn rating(&self) -> Result<Option<i64>, ParseError> {
        self.handler.get_int_at(&["overallRating", "rating"])
    }
}
