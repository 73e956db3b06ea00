//! Publish-state parsing.
//!
//! Shopify exports `TRUE`/`FALSE` in `Published` and `active`/`draft` in
//! `Status`; Japanese storefronts write `公開` (public), sometimes with a
//! prefix or suffix such as `公開中`.

use catalog_model::PublishStatus;

const PUBLISHED_TOKENS: [&str; 4] = ["true", "1", "active", "公開"];
const PUBLIC_MARKER: &str = "公開";

/// Parses a status cell; anything unrecognized is a draft.
///
/// Any value containing `公開` is published. That includes `非公開`, which
/// storefronts use for "private"; callers wanting those as drafts must map
/// the status column away.
pub fn parse_status(value: &str) -> PublishStatus {
    let normalized = value.trim().to_lowercase();
    if PUBLISHED_TOKENS.contains(&normalized.as_str()) || normalized.contains(PUBLIC_MARKER) {
        PublishStatus::Published
    } else {
        PublishStatus::Draft
    }
}
