//! Request parameter types and normalisation.
//!
//! This module turns high-level method arguments into the flat query
//! parameters the Walmart Open API expects.
//!
//! - [`SearchParams`]: search filters plus page-based pagination, translated
//!   into the API's `start` offset
//! - [`CategoryId`]: an integer category id, validated from loosely typed input
//! - [`RichAttributes`]: the two-valued `richAttributes` switch
//! - [`ResponseFormat`]: the response format token, always JSON

mod category;
mod search;

pub use category::CategoryId;
pub use search::{
    ResponseGroup, SearchParams, SortKind, SortOrder, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};

use std::fmt;

/// Whether responses should include rich item attributes.
///
/// Sent on every request as the literal `true` or `false`.
///
/// # Example
///
/// ```rust
/// use walmart_api::RichAttributes;
///
/// assert_eq!(RichAttributes::default().as_str(), "true");
/// assert_eq!(RichAttributes::from(false).as_str(), "false");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RichAttributes {
    /// `richAttributes=true`
    #[default]
    Enabled,
    /// `richAttributes=false`
    Disabled,
}

impl RichAttributes {
    /// Query parameter name.
    pub const PARAM: &'static str = "richAttributes";

    /// Returns the wire token.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Enabled => "true",
            Self::Disabled => "false",
        }
    }
}

impl From<bool> for RichAttributes {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }
}

impl fmt::Display for RichAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response format requested from the API.
///
/// Only the structured JSON format is supported; callers cannot change it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponseFormat {
    /// `format=json`
    #[default]
    Json,
}

impl ResponseFormat {
    /// Query parameter name.
    pub const PARAM: &'static str = "format";

    /// Returns the wire token.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
        }
    }
}
