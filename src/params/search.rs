//! Search request parameters.
//!
//! The Walmart search endpoint paginates with a 1-based `start` offset.
//! [`SearchParams`] exposes a page-based interface instead and derives
//! `start` from the page number and page size.

use std::fmt;

use crate::error::InvalidParameterError;
use crate::params::{CategoryId, RichAttributes};

/// Largest page size the search endpoint accepts.
pub const MAX_PAGE_SIZE: u32 = 25;

/// Page size the search endpoint uses when `numItems` is not sent.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Sorting criteria for search results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKind {
    /// Relevance (the API default).
    Relevance,
    /// Price. Combine with [`SortOrder`].
    Price,
    /// Title. Combine with [`SortOrder`].
    Title,
    /// Best sellers first.
    Bestseller,
    /// Customer rating. Combine with [`SortOrder`].
    CustomerRating,
    /// Newest first.
    New,
}

impl SortKind {
    /// Returns the wire token.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Price => "price",
            Self::Title => "title",
            Self::Bestseller => "bestseller",
            Self::CustomerRating => "customerRating",
            Self::New => "new",
        }
    }
}

impl fmt::Display for SortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction, used with the price, title and rating sorts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl SortOrder {
    /// Returns the wire token.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Which item fields the search response carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseGroup {
    /// The default, reduced field set.
    Base,
    /// Every field.
    Full,
}

impl ResponseGroup {
    /// Returns the wire token.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Full => "full",
        }
    }
}

/// Parameters for a catalogue search.
///
/// Built fresh for every call and consumed by
/// [`WalmartClient::search`](crate::WalmartClient::search); nothing here is
/// shared between requests.
///
/// # Pagination
///
/// - `page` and `num_items`: `start = num_items * (page - 1) + 1`, with
///   `num_items` capped at [`MAX_PAGE_SIZE`]
/// - `page` alone: the API's default page size of 10 is assumed
/// - no `page`: no `start` is sent and `num_items` is passed through as is
///
/// The page number itself is never sent.
///
/// # Example
///
/// ```rust
/// use walmart_api::{SearchParams, SortKind, SortOrder};
///
/// let params = SearchParams::new("ipod")
///     .page(2)
///     .num_items(5)
///     .sort(SortKind::Price)
///     .order(SortOrder::Asc);
///
/// let query = params.to_query().unwrap();
/// assert!(query.contains(&("start".to_string(), "6".to_string())));
/// assert!(!query.iter().any(|(key, _)| key == "page"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchParams {
    query: String,
    page: Option<u32>,
    num_items: Option<u32>,
    category_id: Option<CategoryId>,
    sort: Option<SortKind>,
    order: Option<SortOrder>,
    response_group: Option<ResponseGroup>,
    facet: Option<bool>,
    facet_filters: Vec<String>,
    facet_range: Option<String>,
    rich_attributes: RichAttributes,
}

impl SearchParams {
    /// Creates search parameters for a whitespace-separated keyword query.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Returns the keyword query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Selects the 1-based result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size. When a page is also selected it may be at most
    /// [`MAX_PAGE_SIZE`].
    #[must_use]
    pub const fn num_items(mut self, num_items: u32) -> Self {
        self.num_items = Some(num_items);
        self
    }

    /// Restricts the search to a category.
    #[must_use]
    pub const fn category_id(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Sets the sort criteria.
    #[must_use]
    pub const fn sort(mut self, sort: SortKind) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Sets the sort direction.
    #[must_use]
    pub const fn order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Sets the response group.
    #[must_use]
    pub const fn response_group(mut self, group: ResponseGroup) -> Self {
        self.response_group = Some(group);
        self
    }

    /// Turns facets on or off.
    #[must_use]
    pub const fn facet(mut self, enabled: bool) -> Self {
        self.facet = Some(enabled);
        self
    }

    /// Adds a `facet.filter` of the form `name:value`. May be repeated.
    #[must_use]
    pub fn facet_filter(mut self, filter: impl Into<String>) -> Self {
        self.facet_filters.push(filter.into());
        self
    }

    /// Sets a `facet.range` filter, e.g. `price:[10 TO 20]`.
    #[must_use]
    pub fn facet_range(mut self, range: impl Into<String>) -> Self {
        self.facet_range = Some(range.into());
        self
    }

    /// Sets the `richAttributes` switch for this search.
    #[must_use]
    pub fn rich_attributes(mut self, rich: impl Into<RichAttributes>) -> Self {
        self.rich_attributes = rich.into();
        self
    }

    /// Returns the `richAttributes` switch for this search.
    #[must_use]
    pub const fn rich_attributes_value(&self) -> RichAttributes {
        self.rich_attributes
    }

    /// Returns the 1-based `start` offset derived from the page settings.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameterError::InvalidPage`] for page 0 and
    /// [`InvalidParameterError::TooManyItems`] for a page size above
    /// [`MAX_PAGE_SIZE`]. Without a page there is nothing to derive and
    /// neither check applies.
    pub fn start(&self) -> Result<Option<u64>, InvalidParameterError> {
        let Some(page) = self.page else {
            return Ok(None);
        };

        if let Some(num_items) = self.num_items {
            if num_items > MAX_PAGE_SIZE {
                return Err(InvalidParameterError::TooManyItems {
                    value: num_items,
                    max: MAX_PAGE_SIZE,
                });
            }
        }
        if page == 0 {
            return Err(InvalidParameterError::InvalidPage { value: page });
        }

        let page_size = u64::from(self.num_items.unwrap_or(DEFAULT_PAGE_SIZE));
        Ok(Some(page_size * (u64::from(page) - 1) + 1))
    }

    /// Validates the parameters and flattens them into query pairs.
    ///
    /// The `richAttributes`, API key and format parameters are not included;
    /// the transport adds those to every request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameterError`] if the query is empty or the
    /// pagination settings are out of range.
    pub fn to_query(&self) -> Result<Vec<(String, String)>, InvalidParameterError> {
        if self.query.trim().is_empty() {
            return Err(InvalidParameterError::EmptyQuery);
        }

        let mut query = vec![("query".to_string(), self.query.clone())];

        if let Some(start) = self.start()? {
            query.push(("start".to_string(), start.to_string()));
        }
        if let Some(num_items) = self.num_items {
            query.push(("numItems".to_string(), num_items.to_string()));
        }
        if let Some(category_id) = self.category_id {
            query.push((CategoryId::PARAM.to_string(), category_id.to_string()));
        }
        if let Some(sort) = self.sort {
            query.push(("sort".to_string(), sort.as_str().to_string()));
        }
        if let Some(order) = self.order {
            query.push(("order".to_string(), order.as_str().to_string()));
        }
        if let Some(group) = self.response_group {
            query.push(("responseGroup".to_string(), group.as_str().to_string()));
        }
        if let Some(facet) = self.facet {
            let token = if facet { "on" } else { "off" };
            query.push(("facet".to_string(), token.to_string()));
        }
        for filter in &self.facet_filters {
            query.push(("facet.filter".to_string(), filter.clone()));
        }
        if let Some(range) = &self.facet_range {
            query.push(("facet.range".to_string(), range.clone()));
        }

        Ok(query)
    }
}
