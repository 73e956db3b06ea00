//! End-to-end scenarios for the transform pipeline.

use catalog_map::{detect_platform, get_default_field_map};
use catalog_model::{CanonicalField, FieldMap, PlatformId, PublishStatus, Row, TransformOptions};
use catalog_transform::transform_csv_to_products;

fn row(cells: &[(&str, &str)]) -> Row {
    cells
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn options() -> TransformOptions {
    TransformOptions::new()
        .with_default_category("uncategorized")
        .with_default_currency("jpy")
}

const SHOPIFY_HEADERS: [&str; 10] = [
    "Handle",
    "Title",
    "Body (HTML)",
    "Vendor",
    "Tags",
    "Published",
    "Option1 Value",
    "Option2 Value",
    "Variant SKU",
    "Variant Price",
];

fn shopify_map() -> FieldMap {
    let mut headers = SHOPIFY_HEADERS.to_vec();
    headers.extend(["Variant Inventory Qty", "Image Src"]);
    get_default_field_map(PlatformId::Shopify, &headers)
}

fn base_map() -> FieldMap {
    get_default_field_map(
        PlatformId::Base,
        &["商品名", "販売価格", "在庫数", "品番", "画像URL", "カラー", "サイズ"],
    )
}

#[test]
fn grouped_rows_rebuild_one_product() {
    let rows = vec![
        row(&[
            ("Handle", "dress-1"),
            ("Title", "Dress"),
            ("Vendor", "Acme"),
            ("Variant Price", "100"),
            ("Option1 Value", "Red"),
            ("Image Src", "https://x/1.jpg"),
        ]),
        row(&[
            ("Handle", "dress-1"),
            ("Option1 Value", "Blue"),
            ("Image Src", "https://x/2.jpg"),
        ]),
    ];

    let result = transform_csv_to_products(&rows, &shopify_map(), PlatformId::Shopify, &options());

    assert!(result.errors.is_empty());
    assert_eq!(result.products.len(), 1);
    let product = &result.products[0];
    assert_eq!(product.name, "Dress");
    assert_eq!(product.brand.as_deref(), Some("Acme"));
    assert_eq!(product.price, 100.0);
    assert_eq!(product.currency, "jpy");
    assert_eq!(product.category, "uncategorized");
    insta::assert_json_snapshot!(product.images, @r###"
    [
      {
        "url": "https://x/1.jpg",
        "color": "Red"
      },
      {
        "url": "https://x/2.jpg",
        "color": "Blue"
      }
    ]
    "###);
    insta::assert_json_snapshot!(product.variants, @r###"
    [
      {
        "color": "Red",
        "size": null,
        "sku": "",
        "stock": 0,
        "price_override": null
      },
      {
        "color": "Blue",
        "size": null,
        "sku": "",
        "stock": 0,
        "price_override": null
      }
    ]
    "###);
}

#[test]
fn grouped_rows_need_not_be_contiguous() {
    let rows = vec![
        row(&[("Handle", "a"), ("Title", "A"), ("Variant Price", "10"), ("Variant SKU", "A-1")]),
        row(&[("Handle", "b"), ("Title", "B"), ("Variant Price", "20")]),
        row(&[("Handle", "a"), ("Variant SKU", "A-2"), ("Variant Price", "12")]),
    ];
    let result = transform_csv_to_products(&rows, &shopify_map(), PlatformId::Shopify, &options());

    let names: Vec<_> = result.products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);
    let a = &result.products[0];
    assert_eq!(a.variants.len(), 2);
    assert_eq!(a.variants[0].price_override, None);
    assert_eq!(a.variants[1].sku, "A-2");
    assert_eq!(a.variants[1].price_override, Some(12.0));
}

#[test]
fn image_only_rows_add_images_but_no_variants() {
    let rows = vec![
        row(&[
            ("Handle", "tee"),
            ("Title", "Tee"),
            ("Variant Price", "30"),
            ("Image Src", "https://x/front.jpg"),
        ]),
        row(&[("Handle", "tee"), ("Image Src", "https://x/back.jpg")]),
        row(&[("Handle", "tee"), ("Image Src", "https://x/front.jpg")]),
    ];
    let result = transform_csv_to_products(&rows, &shopify_map(), PlatformId::Shopify, &options());

    let product = &result.products[0];
    assert_eq!(product.variants.len(), 1);
    assert_eq!(product.variants[0].color, None);
    let urls: Vec<_> = product.images.iter().map(|i| i.url.as_str()).collect();
    assert_eq!(urls, vec!["https://x/front.jpg", "https://x/back.jpg"]);
    assert!(product.images.iter().all(|i| i.color.is_none()));
}

#[test]
fn size_only_rows_create_variants() {
    let rows = vec![
        row(&[("Handle", "tee"), ("Title", "Tee"), ("Variant Price", "30"), ("Option2 Value", "S")]),
        row(&[("Handle", "tee"), ("Option2 Value", "M")]),
    ];
    let result = transform_csv_to_products(&rows, &shopify_map(), PlatformId::Shopify, &options());

    let sizes: Vec<_> = result.products[0]
        .variants
        .iter()
        .map(|v| v.size.as_deref())
        .collect();
    assert_eq!(sizes, vec![Some("S"), Some("M")]);
}

#[test]
fn invalid_first_row_drops_whole_group() {
    let rows = vec![
        row(&[("Handle", "bad"), ("Title", "Bad"), ("Variant Price", "n/a")]),
        row(&[("Handle", "bad"), ("Title", "Still bad"), ("Variant Price", "10")]),
        row(&[("Handle", "good"), ("Title", "Good"), ("Variant Price", "10")]),
    ];
    let result = transform_csv_to_products(&rows, &shopify_map(), PlatformId::Shopify, &options());

    assert_eq!(result.products.len(), 1);
    assert_eq!(result.products[0].name, "Good");
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].row, 2);
    assert_eq!(result.errors[0].field, CanonicalField::Price);
}

#[test]
fn rows_without_group_key_are_skipped_silently() {
    let rows = vec![
        row(&[("Handle", ""), ("Title", "Orphan"), ("Variant Price", "10")]),
        row(&[("Handle", "kept"), ("Title", "Kept"), ("Variant Price", "10")]),
    ];
    let result = transform_csv_to_products(&rows, &shopify_map(), PlatformId::Shopify, &options());

    assert_eq!(result.products.len(), 1);
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
}

#[test]
fn grouped_product_attributes_come_from_first_row() {
    let rows = vec![
        row(&[
            ("Handle", "bag"),
            ("Title", "Bag"),
            ("Body (HTML)", "<p>Leather<br>Handmade &amp; durable</p>"),
            ("Tags", "leather, bag,"),
            ("Published", "TRUE"),
            ("Variant Price", "¥12,000"),
        ]),
        row(&[("Handle", "bag"), ("Title", "Other"), ("Published", "FALSE")]),
    ];
    let result = transform_csv_to_products(&rows, &shopify_map(), PlatformId::Shopify, &options());

    let product = &result.products[0];
    assert_eq!(product.name, "Bag");
    assert_eq!(product.price, 12000.0);
    assert_eq!(product.description.as_deref(), Some("Leather\nHandmade & durable"));
    assert_eq!(
        product.tags,
        Some(vec!["leather".to_string(), "bag".to_string()])
    );
    assert_eq!(product.status, PublishStatus::Published);
}

#[test]
fn flat_row_becomes_product() {
    let rows = vec![row(&[("商品名", "Tシャツ"), ("販売価格", "¥2,500"), ("在庫数", "10")])];
    let result = transform_csv_to_products(&rows, &base_map(), PlatformId::Base, &options());

    assert!(result.errors.is_empty());
    assert_eq!(result.products.len(), 1);
    let product = &result.products[0];
    assert_eq!(product.name, "Tシャツ");
    assert_eq!(product.price, 2500.0);
    assert_eq!(product.variants.len(), 1);
    assert_eq!(product.variants[0].stock, 10);
    assert_eq!(product.variants[0].price_override, None);
}

#[test]
fn flat_image_cell_splits_into_images_sharing_color() {
    let rows = vec![row(&[
        ("商品名", "Cap"),
        ("販売価格", "1500"),
        ("カラー", "Navy"),
        ("サイズ", "F"),
        ("画像URL", "https://x/1.jpg;https://x/2.jpg, https://x/3.jpg"),
    ])];
    let result = transform_csv_to_products(&rows, &base_map(), PlatformId::Base, &options());

    let product = &result.products[0];
    assert_eq!(product.images.len(), 3);
    assert!(product.images.iter().all(|i| i.color.as_deref() == Some("Navy")));
    assert_eq!(product.variants[0].color.as_deref(), Some("Navy"));
    assert_eq!(product.variants[0].size.as_deref(), Some("F"));
}

#[test]
fn duplicate_skus_are_renamed_with_warning() {
    let rows = vec![
        row(&[("商品名", "One"), ("販売価格", "100"), ("品番", "ABC")]),
        row(&[("商品名", "Two"), ("販売価格", "100"), ("品番", "ABC")]),
    ];
    let result = transform_csv_to_products(&rows, &base_map(), PlatformId::Base, &options());

    let skus: Vec<_> = result
        .products
        .iter()
        .map(|p| p.variants[0].sku.as_str())
        .collect();
    assert_eq!(skus, vec!["ABC", "ABC-2"]);
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].row, 3);
    assert_eq!(result.warnings[0].field, CanonicalField::Sku);
}

#[test]
fn missing_name_reports_display_row() {
    let rows = vec![row(&[("商品名", " "), ("販売価格", "100")])];
    let result = transform_csv_to_products(&rows, &base_map(), PlatformId::Base, &options());

    assert!(result.products.is_empty());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].field, CanonicalField::Name);
    assert_eq!(result.errors[0].row, 2);
}

#[test]
fn flat_errors_do_not_affect_other_rows() {
    let rows = vec![
        row(&[("商品名", "One"), ("販売価格", "")]),
        row(&[("商品名", "Two"), ("販売価格", "-1")]),
        row(&[("商品名", "Three"), ("販売価格", "300"), ("在庫数", "lots")]),
    ];
    let result = transform_csv_to_products(&rows, &base_map(), PlatformId::Base, &options());

    assert_eq!(result.products.len(), 1);
    assert_eq!(result.products[0].variants[0].stock, 0);
    let error_rows: Vec<_> = result.errors.iter().map(|e| e.row).collect();
    assert_eq!(error_rows, vec![2, 3]);
}

#[test]
fn empty_field_map_fails_every_row() {
    let headers = ["Product", "Cost"];
    let platform = detect_platform(&headers);
    assert_eq!(platform, PlatformId::Unknown);
    let field_map = get_default_field_map(platform, &headers);

    let rows = vec![
        row(&[("Product", "A"), ("Cost", "1")]),
        row(&[("Product", "B"), ("Cost", "2")]),
    ];
    let result = transform_csv_to_products(&rows, &field_map, platform, &options());

    assert!(result.products.is_empty());
    assert_eq!(result.errors.len(), 2);
    assert!(result.errors.iter().all(|e| e.field == CanonicalField::Name));
}

#[test]
fn manual_map_rescues_unknown_platform() {
    let mut field_map = FieldMap::new();
    field_map.merge_override(
        &[("Product", CanonicalField::Name), ("Cost", CanonicalField::Price)]
            .into_iter()
            .collect(),
    );
    let rows = vec![row(&[("Product", "A"), ("Cost", "$1.50")])];
    let result = transform_csv_to_products(&rows, &field_map, PlatformId::Unknown, &options());

    assert_eq!(result.products.len(), 1);
    assert_eq!(result.products[0].price, 1.5);
}

#[test]
fn manual_map_redirects_a_default_field() {
    let mut field_map =
        get_default_field_map(PlatformId::Base, &["商品名", "販売価格", "正式名称"]);
    field_map.merge_override(&[("正式名称", CanonicalField::Name)].into_iter().collect());
    let rows = vec![row(&[
        ("商品名", "short"),
        ("販売価格", "500"),
        ("正式名称", "Official"),
    ])];
    let result = transform_csv_to_products(&rows, &field_map, PlatformId::Base, &options());

    assert!(result.errors.is_empty());
    assert_eq!(result.products[0].name, "Official");
}

#[test]
fn stores_rows_fill_extended_attributes() {
    let field_map = get_default_field_map(
        PlatformId::Stores,
        &["アイテム名", "アイテム名(英語)", "価格", "定価", "素材", "取扱い", "公開設定"],
    );
    let rows = vec![row(&[
        ("アイテム名", "ニット"),
        ("アイテム名(英語)", "Knit"),
        ("価格", "8,800"),
        ("定価", "11,000"),
        ("素材", "ウール100%"),
        ("取扱い", "手洗い<br>陰干し"),
        ("公開設定", "公開中"),
    ])];
    let result = transform_csv_to_products(&rows, &field_map, PlatformId::Stores, &options());

    let product = &result.products[0];
    assert_eq!(product.name_en.as_deref(), Some("Knit"));
    assert_eq!(product.price, 8800.0);
    assert_eq!(product.compare_at_price, Some(11000.0));
    assert_eq!(product.materials.as_deref(), Some("ウール100%"));
    assert_eq!(product.care_instructions.as_deref(), Some("手洗い\n陰干し"));
    assert_eq!(product.status, PublishStatus::Published);
}

#[test]
fn renamed_sku_skips_suffixes_present_in_the_file() {
    let rows = vec![
        row(&[("商品名", "One"), ("販売価格", "100"), ("品番", "ABC")]),
        row(&[("商品名", "Two"), ("販売価格", "100"), ("品番", "ABC-2")]),
        row(&[("商品名", "Three"), ("販売価格", "100"), ("品番", "ABC")]),
    ];
    let result = transform_csv_to_products(&rows, &base_map(), PlatformId::Base, &options());

    let skus: Vec<_> = result
        .products
        .iter()
        .map(|p| p.variants[0].sku.as_str())
        .collect();
    assert_eq!(skus, vec!["ABC", "ABC-2", "ABC-3"]);
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].row, 4);
}

#[test]
fn grouped_sku_collisions_span_buckets() {
    let rows = vec![
        row(&[("Handle", "a"), ("Title", "A"), ("Variant Price", "10"), ("Variant SKU", "X")]),
        row(&[("Handle", "a"), ("Variant SKU", "X")]),
        row(&[("Handle", "b"), ("Title", "B"), ("Variant Price", "20"), ("Variant SKU", "X")]),
    ];
    let result = transform_csv_to_products(&rows, &shopify_map(), PlatformId::Shopify, &options());

    let skus: Vec<_> = result
        .products
        .iter()
        .flat_map(|p| p.variants.iter().map(|v| v.sku.as_str()))
        .collect();
    assert_eq!(skus, vec!["X", "X-2", "X-3"]);
    let rows: Vec<_> = result.warnings.iter().map(|w| w.row).collect();
    assert_eq!(rows, vec![3, 4]);
}

#[test]
fn repeated_calls_yield_identical_results() {
    let rows = vec![
        row(&[("商品名", "One"), ("販売価格", "100"), ("品番", "ABC")]),
        row(&[("商品名", "Two"), ("販売価格", "100"), ("品番", "ABC")]),
    ];
    let first = transform_csv_to_products(&rows, &base_map(), PlatformId::Base, &options());
    let second = transform_csv_to_products(&rows, &base_map(), PlatformId::Base, &options());
    assert_eq!(first, second);
    assert_eq!(second.products[0].variants[0].sku, "ABC");
}
