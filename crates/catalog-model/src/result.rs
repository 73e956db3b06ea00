//! Outcome records of a transform call.

use serde::{Deserialize, Serialize};

use crate::field::CanonicalField;
use crate::product::VualProduct;

/// A problem that kept a product out of the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformError {
    /// 1-based line number, the header being line 1.
    pub row: usize,
    pub field: CanonicalField,
    pub message: String,
}

/// A problem that was corrected automatically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformWarning {
    /// 1-based line number, the header being line 1.
    pub row: usize,
    pub field: CanonicalField,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformResult {
    pub products: Vec<VualProduct>,
    pub errors: Vec<TransformError>,
    pub warnings: Vec<TransformWarning>,
}

impl TransformResult {
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn variant_count(&self) -> usize {
        self.products.iter().map(|p| p.variants.len()).sum()
    }

    pub fn image_count(&self) -> usize {
        self.products.iter().map(|p| p.images.len()).sum()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
