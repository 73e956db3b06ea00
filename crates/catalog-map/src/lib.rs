//! Platform detection and column mapping for product-catalog CSV imports.
//!
//! - **detect**: identifies the exporting platform from the header row
//! - **mapper**: builds a platform's default column-to-field map
//! - **registry**: header signatures and default maps of known platforms
//! - **repository**: manual field maps on disk

pub mod detect;
pub mod mapper;
pub mod registry;
pub mod repository;

pub use detect::{MIN_SIGNATURE_MATCHES, PlatformScore, detect_platform, score_platforms};
pub use mapper::{MappingSummary, get_default_field_map, summarize_mapping};
pub use registry::{PLATFORMS, platform_config};
pub use repository::{load_field_map, save_field_map};
