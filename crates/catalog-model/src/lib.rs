//! Canonical data model for product-catalog CSV imports.

pub mod error;
pub mod field;
pub mod options;
pub mod platform;
pub mod product;
pub mod result;
pub mod row;

pub use error::{CatalogError, Result};
pub use field::{CanonicalField, FieldMap, FieldMapping};
pub use options::{DEFAULT_CATEGORY, DEFAULT_CURRENCY, TransformOptions};
pub use platform::{GroupingMode, PlatformConfig, PlatformId};
pub use product::{PublishStatus, VualProduct, VualProductImage, VualProductVariant};
pub use result::{TransformError, TransformResult, TransformWarning};
pub use row::{HEADER_ROWS, Row, display_row};
