//! Entry point turning parsed CSV rows into catalog products.
//!
//! Callers run [`catalog_map::detect_platform`] and
//! [`catalog_map::get_default_field_map`] first (optionally overlaying a
//! manual map) and hand the results here.

use std::time::Instant;

use catalog_model::{FieldMap, PlatformId, Row, TransformOptions, TransformResult};
use tracing::{info, info_span};

use crate::context::TransformContext;
use crate::flat::transform_flat;
use crate::grouped::transform_grouped;
use crate::strategy::TransformStrategy;

/// Transforms `rows` into products using `field_map`.
///
/// The strategy is fixed by `platform`: multi-row platforms group rows by
/// their group-by column, every other platform (including unknown) reads one
/// product per row. Problems with individual rows are reported in the result
/// rather than aborting the call.
pub fn transform_csv_to_products(
    rows: &[Row],
    field_map: &FieldMap,
    platform: PlatformId,
    options: &TransformOptions,
) -> TransformResult {
    let strategy = TransformStrategy::for_platform(platform);
    let span = info_span!(
        "transform",
        platform = %platform,
        strategy = strategy.as_str(),
        rows = rows.len()
    );
    let _guard = span.enter();
    let start = Instant::now();

    let mut ctx = TransformContext::new(field_map, options);
    match strategy {
        TransformStrategy::Grouped { group_by } => transform_grouped(rows, group_by, &mut ctx),
        TransformStrategy::Flat => transform_flat(rows, &mut ctx),
    }
    let result = ctx.into_result();

    info!(
        products = result.product_count(),
        variants = result.variant_count(),
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        duration_ms = start.elapsed().as_millis(),
        "transform complete"
    );
    result
}
