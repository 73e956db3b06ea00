//! Normalization of raw cell values into typed product attributes.
//!
//! - **numeric**: price and stock parsing
//! - **status**: publish-state tokens
//! - **text**: markup stripping, tag lists, optional text

pub mod numeric;
pub mod status;
pub mod text;

pub use numeric::{parse_price, parse_stock};
pub use status::parse_status;
pub use text::{non_empty, parse_tags, split_image_urls, strip_html};
