//! One row, one product.

use catalog_model::{CanonicalField, Row, display_row};

use crate::context::TransformContext;
use crate::normalization::{non_empty, split_image_urls};

/// Rows are independent: a rejected row only contributes its error. The
/// single variant of each product never carries a price override.
pub(crate) fn transform_flat(rows: &[Row], ctx: &mut TransformContext<'_>) {
    for (idx, row) in rows.iter().enumerate() {
        let row_number = display_row(idx);
        let mut product = match ctx.product_from_row(row, row_number) {
            Ok(product) => product,
            Err(error) => {
                ctx.push_error(error);
                continue;
            }
        };

        let color = non_empty(ctx.value(row, CanonicalField::Color));
        for url in split_image_urls(ctx.value(row, CanonicalField::ImageUrl)) {
            product.push_image(url, color.as_deref());
        }

        let variant = ctx.variant_from_row(row, row_number, None);
        product.variants.push(variant);
        ctx.push_product(product);
    }
}
