//! Built-in export formats of the supported platforms.
//!
//! Header strings are reproduced exactly as each platform writes them.

use catalog_model::CanonicalField::{
    Brand, CareInstructions, Category, Color, CompareAtPrice, Description, ImageUrl, Materials,
    Name, NameEn, Price, Size, Sku, Status, Stock, Tags, Unmapped,
};
use catalog_model::{GroupingMode, PlatformConfig, PlatformId};

pub const SHOPIFY: PlatformConfig = PlatformConfig {
    id: PlatformId::Shopify,
    display_name: "Shopify",
    header_signature: &[
        "Handle",
        "Title",
        "Body (HTML)",
        "Vendor",
        "Type",
        "Tags",
        "Published",
        "Option1 Name",
        "Option1 Value",
        "Option2 Name",
        "Option2 Value",
        "Variant SKU",
        "Variant Inventory Qty",
        "Variant Price",
        "Variant Compare At Price",
        "Image Src",
    ],
    grouping: GroupingMode::MultiRow,
    group_by: Some("Handle"),
    default_field_map: &[
        ("Handle", Unmapped),
        ("Title", Name),
        ("Body (HTML)", Description),
        ("Vendor", Brand),
        ("Type", Category),
        ("Tags", Tags),
        ("Published", Status),
        ("Status", Status),
        ("Option1 Name", Unmapped),
        ("Option1 Value", Color),
        ("Option2 Name", Unmapped),
        ("Option2 Value", Size),
        ("Variant SKU", Sku),
        ("Variant Inventory Qty", Stock),
        ("Variant Price", Price),
        ("Variant Compare At Price", CompareAtPrice),
        ("Image Src", ImageUrl),
    ],
};

pub const BASE: PlatformConfig = PlatformConfig {
    id: PlatformId::Base,
    display_name: "BASE",
    header_signature: &[
        "商品ID",
        "商品名",
        "説明",
        "販売価格",
        "在庫数",
        "公開状態",
        "画像URL",
        "カラー",
        "サイズ",
        "品番",
    ],
    grouping: GroupingMode::None,
    group_by: None,
    default_field_map: &[
        ("商品ID", Unmapped),
        ("商品名", Name),
        ("説明", Description),
        ("販売価格", Price),
        ("在庫数", Stock),
        ("公開状態", Status),
        ("画像URL", ImageUrl),
        ("カラー", Color),
        ("サイズ", Size),
        ("品番", Sku),
    ],
};

pub const STORES: PlatformConfig = PlatformConfig {
    id: PlatformId::Stores,
    display_name: "STORES",
    header_signature: &[
        "アイテム名",
        "アイテム名(英語)",
        "アイテム説明",
        "価格",
        "定価",
        "在庫",
        "カテゴリ",
        "ブランド",
        "素材",
        "取扱い",
        "SKU",
        "色",
        "サイズ展開",
        "画像",
        "タグ",
        "公開設定",
    ],
    grouping: GroupingMode::None,
    group_by: None,
    default_field_map: &[
        ("アイテム名", Name),
        ("アイテム名(英語)", NameEn),
        ("アイテム説明", Description),
        ("価格", Price),
        ("定価", CompareAtPrice),
        ("在庫", Stock),
        ("カテゴリ", Category),
        ("ブランド", Brand),
        ("素材", Materials),
        ("取扱い", CareInstructions),
        ("SKU", Sku),
        ("色", Color),
        ("サイズ展開", Size),
        ("画像", ImageUrl),
        ("タグ", Tags),
        ("公開設定", Status),
    ],
};

/// Known platforms in detection order; earlier entries win exact score ties.
pub const PLATFORMS: [&PlatformConfig; 3] = [&SHOPIFY, &BASE, &STORES];

/// Returns the configuration of a known platform.
pub fn platform_config(id: PlatformId) -> Option<&'static PlatformConfig> {
    PLATFORMS.into_iter().find(|config| config.id == id)
}
