//! Per-call transformation state.
//!
//! A [`TransformContext`] is created fresh for every transform call and owns
//! the SKU registry plus the result accumulators, so concurrent imports never
//! share mutable state.

use catalog_model::{
    CanonicalField, FieldMap, Row, TransformError, TransformOptions, TransformResult,
    VualProduct, VualProductVariant,
};
use tracing::debug;

use crate::dedupe::SkuRegistry;
use crate::normalization::{
    non_empty, parse_price, parse_status, parse_stock, parse_tags, strip_html,
};

/// Runtime context shared by both transform strategies.
#[derive(Debug)]
pub struct TransformContext<'a> {
    pub field_map: &'a FieldMap,
    pub options: &'a TransformOptions,
    skus: SkuRegistry,
    result: TransformResult,
}

impl<'a> TransformContext<'a> {
    pub fn new(field_map: &'a FieldMap, options: &'a TransformOptions) -> Self {
        Self {
            field_map,
            options,
            skus: SkuRegistry::new(),
            result: TransformResult::default(),
        }
    }

    /// Trimmed cell of `row` for `field`, `""` when unmapped or missing.
    pub fn value<'r>(&self, row: &'r Row, field: CanonicalField) -> &'r str {
        self.field_map.value(row, field)
    }

    pub fn push_error(&mut self, error: TransformError) {
        debug!(row = error.row, field = %error.field, "row rejected");
        self.result.errors.push(error);
    }

    pub fn push_product(&mut self, product: VualProduct) {
        self.result.products.push(product);
    }

    /// Builds the product-level attributes of `row` with no images or variants.
    ///
    /// Fails when the name is blank or the price does not parse.
    pub fn product_from_row(
        &self,
        row: &Row,
        row_number: usize,
    ) -> Result<VualProduct, TransformError> {
        let name = self.value(row, CanonicalField::Name);
        if name.is_empty() {
            return Err(TransformError {
                row: row_number,
                field: CanonicalField::Name,
                message: "product name is required".to_string(),
            });
        }
        let raw_price = self.value(row, CanonicalField::Price);
        let Some(price) = parse_price(raw_price) else {
            let message = if raw_price.is_empty() {
                "price is required".to_string()
            } else {
                format!("invalid price \"{raw_price}\"")
            };
            return Err(TransformError {
                row: row_number,
                field: CanonicalField::Price,
                message,
            });
        };

        Ok(VualProduct {
            name: name.to_string(),
            name_en: non_empty(self.value(row, CanonicalField::NameEn)),
            description: non_empty(&strip_html(self.value(row, CanonicalField::Description))),
            category: non_empty(self.value(row, CanonicalField::Category))
                .unwrap_or_else(|| self.options.default_category.clone()),
            price,
            compare_at_price: parse_price(self.value(row, CanonicalField::CompareAtPrice)),
            currency: self.options.default_currency.clone(),
            brand: non_empty(self.value(row, CanonicalField::Brand)),
            tags: parse_tags(self.value(row, CanonicalField::Tags)),
            materials: non_empty(&strip_html(self.value(row, CanonicalField::Materials))),
            care_instructions: non_empty(&strip_html(
                self.value(row, CanonicalField::CareInstructions),
            )),
            status: parse_status(self.value(row, CanonicalField::Status)),
            images: Vec::new(),
            variants: Vec::new(),
        })
    }

    /// Builds a variant from `row`, registering its SKU.
    ///
    /// `base_price` enables price overrides: the row's own price is kept only
    /// when it parses and differs from the product price.
    pub fn variant_from_row(
        &mut self,
        row: &Row,
        row_number: usize,
        base_price: Option<f64>,
    ) -> VualProductVariant {
        let resolution = self.skus.resolve(self.field_map.value(row, CanonicalField::Sku));
        if let Some(warning) = resolution.warning(row_number) {
            self.result.warnings.push(warning);
        }
        let price_override = base_price.and_then(|base| {
            parse_price(self.value(row, CanonicalField::Price)).filter(|price| *price != base)
        });
        VualProductVariant {
            color: non_empty(self.value(row, CanonicalField::Color)),
            size: non_empty(self.value(row, CanonicalField::Size)),
            sku: resolution.sku,
            stock: parse_stock(self.value(row, CanonicalField::Stock)),
            price_override,
        }
    }

    pub fn into_result(self) -> TransformResult {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> FieldMap {
        [
            ("name", CanonicalField::Name),
            ("price", CanonicalField::Price),
            ("category", CanonicalField::Category),
            ("sku", CanonicalField::Sku),
            ("description", CanonicalField::Description),
        ]
        .into_iter()
        .collect()
    }

    fn row(cells: &[(&str, &str)]) -> Row {
        cells
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn product_uses_defaults_for_blank_cells() {
        let field_map = map();
        let options = TransformOptions::default();
        let ctx = TransformContext::new(&field_map, &options);
        let product = ctx
            .product_from_row(&row(&[("name", "Cap"), ("price", "0")]), 2)
            .unwrap();
        assert_eq!(product.category, "uncategorized");
        assert_eq!(product.currency, "jpy");
        assert_eq!(product.price, 0.0);
        assert_eq!(product.description, None);
        assert_eq!(product.tags, None);
    }

    #[test]
    fn blank_description_after_stripping_is_none() {
        let field_map = map();
        let options = TransformOptions::default();
        let ctx = TransformContext::new(&field_map, &options);
        let product = ctx
            .product_from_row(
                &row(&[("name", "Cap"), ("price", "1"), ("description", "<p></p>")]),
                2,
            )
            .unwrap();
        assert_eq!(product.description, None);
    }

    #[test]
    fn invalid_price_reports_raw_value() {
        let field_map = map();
        let options = TransformOptions::default();
        let ctx = TransformContext::new(&field_map, &options);
        let error = ctx
            .product_from_row(&row(&[("name", "Cap"), ("price", "abc")]), 5)
            .unwrap_err();
        assert_eq!(error.row, 5);
        assert_eq!(error.field, CanonicalField::Price);
        assert!(error.message.contains("abc"));
    }

    #[test]
    fn price_override_only_when_different() {
        let field_map = map();
        let options = TransformOptions::default();
        let mut ctx = TransformContext::new(&field_map, &options);
        let same = ctx.variant_from_row(&row(&[("price", "100")]), 2, Some(100.0));
        let other = ctx.variant_from_row(&row(&[("price", "120")]), 3, Some(100.0));
        let flat = ctx.variant_from_row(&row(&[("price", "120")]), 4, None);
        assert_eq!(same.price_override, None);
        assert_eq!(other.price_override, Some(120.0));
        assert_eq!(flat.price_override, None);
    }
}
