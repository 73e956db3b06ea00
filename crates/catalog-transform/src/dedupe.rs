//! Call-scoped SKU deduplication.

use std::collections::BTreeSet;

use catalog_model::{CanonicalField, TransformWarning};
use tracing::warn;

/// Outcome of registering one SKU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkuResolution {
    /// SKU to store on the variant.
    pub sku: String,
    /// Original SKU when it had to be renamed.
    pub renamed_from: Option<String>,
}

impl SkuResolution {
    /// Builds the warning reported for a renamed SKU.
    pub fn warning(&self, row: usize) -> Option<TransformWarning> {
        let original = self.renamed_from.as_ref()?;
        Some(TransformWarning {
            row,
            field: CanonicalField::Sku,
            message: format!(
                "duplicate SKU \"{original}\" renamed to \"{}\"",
                self.sku
            ),
        })
    }
}

/// Registry of SKUs already emitted during one transform call.
///
/// Colliding SKUs get the first free `-N` suffix starting at `-2`. Empty SKUs
/// are never registered or renamed.
#[derive(Debug, Clone, Default)]
pub struct SkuRegistry {
    seen: BTreeSet<String>,
}

impl SkuRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `sku`, renaming it if it was already taken.
    pub fn resolve(&mut self, sku: &str) -> SkuResolution {
        let sku = sku.trim();
        if sku.is_empty() {
            return SkuResolution {
                sku: String::new(),
                renamed_from: None,
            };
        }
        if self.seen.insert(sku.to_string()) {
            return SkuResolution {
                sku: sku.to_string(),
                renamed_from: None,
            };
        }
        let mut suffix = 2usize;
        let renamed = loop {
            let candidate = format!("{sku}-{suffix}");
            if !self.seen.contains(&candidate) {
                break candidate;
            }
            suffix += 1;
        };
        self.seen.insert(renamed.clone());
        warn!(original = %sku, renamed = %renamed, "duplicate SKU renamed");
        SkuResolution {
            sku: renamed,
            renamed_from: Some(sku.to_string()),
        }
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
