//! Multi-row products: rows sharing a group key are one product.
//!
//! The first row of a group carries the product-level attributes; every row
//! may add an image, and rows with color, size or SKU data add a variant.
//! Groups need not be contiguous, so the whole input is bucketed before any
//! product is built. Output follows first-seen group order.

use std::collections::BTreeMap;

use catalog_model::{CanonicalField, Row, VualProductVariant, display_row};
use tracing::debug;

use crate::context::TransformContext;
use crate::normalization::non_empty;

/// Rows of one product, with their 0-based data indices.
#[derive(Debug)]
struct Bucket<'r> {
    key: &'r str,
    rows: Vec<(usize, &'r Row)>,
}

fn bucket_rows<'r>(rows: &'r [Row], group_by: &str) -> (Vec<Bucket<'r>>, usize) {
    let mut index: BTreeMap<&'r str, usize> = BTreeMap::new();
    let mut buckets: Vec<Bucket<'r>> = Vec::new();
    let mut ungrouped = 0usize;
    for (idx, row) in rows.iter().enumerate() {
        let key = row.get(group_by).map_or("", |value| value.trim());
        if key.is_empty() {
            ungrouped += 1;
            continue;
        }
        let slot = *index.entry(key).or_insert_with(|| {
            buckets.push(Bucket {
                key,
                rows: Vec::new(),
            });
            buckets.len() - 1
        });
        buckets[slot].rows.push((idx, row));
    }
    (buckets, ungrouped)
}

fn has_variant_data(ctx: &TransformContext<'_>, row: &Row) -> bool {
    [CanonicalField::Color, CanonicalField::Size, CanonicalField::Sku]
        .into_iter()
        .any(|field| !ctx.value(row, field).is_empty())
}

pub(crate) fn transform_grouped(rows: &[Row], group_by: &str, ctx: &mut TransformContext<'_>) {
    let (buckets, ungrouped) = bucket_rows(rows, group_by);
    if ungrouped > 0 {
        debug!(group_by, ungrouped, "rows without a group key skipped");
    }

    for bucket in buckets {
        let Some(&(first_idx, first_row)) = bucket.rows.first() else {
            continue;
        };
        let mut product = match ctx.product_from_row(first_row, display_row(first_idx)) {
            Ok(product) => product,
            Err(error) => {
                debug!(group = bucket.key, rows = bucket.rows.len(), "group dropped");
                ctx.push_error(error);
                continue;
            }
        };

        for (position, &(idx, row)) in bucket.rows.iter().enumerate() {
            let color = non_empty(ctx.value(row, CanonicalField::Color));
            product.push_image(ctx.value(row, CanonicalField::ImageUrl), color.as_deref());

            if position > 0 && !has_variant_data(ctx, row) {
                continue;
            }
            let variant = ctx.variant_from_row(row, display_row(idx), Some(product.price));
            product.variants.push(variant);
        }

        if product.variants.is_empty() {
            product.variants.push(VualProductVariant::placeholder());
        }
        debug!(
            group = bucket.key,
            rows = bucket.rows.len(),
            variants = product.variants.len(),
            images = product.images.len(),
            "group assembled"
        );
        ctx.push_product(product);
    }
}
