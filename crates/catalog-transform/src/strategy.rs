//! Strategy selection from platform configuration.

use catalog_map::platform_config;
use catalog_model::PlatformId;

/// How rows are assembled into products.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformStrategy {
    /// Rows sharing a value in `group_by` form one product.
    Grouped { group_by: &'static str },
    /// Every row is one product.
    Flat,
}

impl TransformStrategy {
    /// Picks the strategy a platform's export format requires.
    pub fn for_platform(platform: PlatformId) -> Self {
        match platform_config(platform).and_then(|config| config.multi_row_group_column()) {
            Some(group_by) => TransformStrategy::Grouped { group_by },
            None => TransformStrategy::Flat,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransformStrategy::Grouped { .. } => "grouped",
            TransformStrategy::Flat => "flat",
        }
    }
}
