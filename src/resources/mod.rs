//! Typed read-only views over API response records.
//!
//! The Walmart Open API answers with loosely structured JSON in which most
//! fields may be missing. Rather than deserializing into rigid structs, each
//! record is kept as a JSON object behind a [`ResponseHandler`], and entity
//! views expose named accessors on top of it:
//!
//! - [`Product`]: items from lookup, search, recommendations, trends and feeds
//! - [`ProductReview`]: entries from the reviews endpoint
//!
//! Missing fields resolve to `None`. Present fields that cannot be coerced
//! to the accessor's type fail with [`ParseError`](crate::ParseError).

mod image;
mod product;
mod response_handler;
mod review;

pub use image::{ImageEntity, ImageSize};
pub use product::{Dimensions, Product, StockStatus, LINK_SHARE_PLACEHOLDER};
pub use response_handler::ResponseHandler;
pub use review::ProductReview;

// Verify views are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ProductReview>();
    assert_send_sync::<ResponseHandler>();
};
