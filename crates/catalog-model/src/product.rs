//! Normalized product records produced by an import.

use serde::{Deserialize, Serialize};

/// Publication state of an imported product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    #[default]
    Draft,
    Published,
}

impl PublishStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PublishStatus::Draft => "draft",
            PublishStatus::Published => "published",
        }
    }
}

/// A product image, optionally scoped to one color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VualProductImage {
    pub url: String,
    /// `None` means the image applies to every color.
    pub color: Option<String>,
}

/// A purchasable color/size combination of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VualProductVariant {
    pub color: Option<String>,
    pub size: Option<String>,
    /// Empty when the source row had no SKU.
    pub sku: String,
    pub stock: u32,
    /// Present only when the variant's own price differs from the product price.
    pub price_override: Option<f64>,
}

impl VualProductVariant {
    /// Variant used when a product yields no variant data at all.
    pub fn placeholder() -> Self {
        Self {
            color: None,
            size: None,
            sku: String::new(),
            stock: 0,
            price_override: None,
        }
    }
}

/// A product in the canonical catalog schema.
///
/// `variants` is never empty for a product returned by the transformer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VualProduct {
    pub name: String,
    pub name_en: Option<String>,
    /// Plain-text description with markup removed.
    pub description: Option<String>,
    pub category: String,
    pub price: f64,
    pub compare_at_price: Option<f64>,
    pub currency: String,
    pub brand: Option<String>,
    pub tags: Option<Vec<String>>,
    pub materials: Option<String>,
    pub care_instructions: Option<String>,
    pub status: PublishStatus,
    pub images: Vec<VualProductImage>,
    pub variants: Vec<VualProductVariant>,
}

impl VualProduct {
    /// Adds an image unless one with the same URL is already attached.
    ///
    /// Returns `true` when the image was added.
    pub fn push_image(&mut self, url: &str, color: Option<&str>) -> bool {
        if url.is_empty() || self.images.iter().any(|image| image.url == url) {
            return false;
        }
        self.images.push(VualProductImage {
            url: url.to_string(),
            color: color.map(str::to_string),
        });
        true
    }
}
