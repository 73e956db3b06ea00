//! Caller-supplied defaults for a transform call.

use serde::{Deserialize, Serialize};

pub const DEFAULT_CATEGORY: &str = "uncategorized";
pub const DEFAULT_CURRENCY: &str = "jpy";

/// Values applied to every product of an import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformOptions {
    /// Category path used when a row carries none.
    pub default_category: String,
    /// Currency for all prices; rows never carry their own.
    pub default_currency: String,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            default_category: DEFAULT_CATEGORY.to_string(),
            default_currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_category(mut self, category: impl Into<String>) -> Self {
        self.default_category = category.into();
        self
    }

    pub fn with_default_currency(mut self, currency: impl Into<String>) -> Self {
        self.default_currency = currency.into();
        self
    }
}
