//! Row transformation for product-catalog CSV imports.
//!
//! - **normalization**: price, stock, status and text cell parsing
//! - **dedupe**: call-scoped SKU collision handling
//! - **strategy**: grouped (multi-row) vs flat (one row per product)
//! - **pipeline**: the `transform_csv_to_products` entry point

pub mod context;
pub mod dedupe;
mod flat;
mod grouped;
pub mod normalization;
pub mod pipeline;
pub mod strategy;

pub use dedupe::{SkuRegistry, SkuResolution};
pub use pipeline::transform_csv_to_products;
pub use strategy::TransformStrategy;
