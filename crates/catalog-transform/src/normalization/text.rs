//! Text cell helpers.

use std::sync::LazyLock;

use regex::Regex;

static LINE_BREAK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("Invalid line break regex"));

static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"));

// `&amp;` goes last so `&amp;lt;` decodes to the literal text `&lt;`.
const ENTITIES: [(&str, &str); 6] = [
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&amp;", "&"),
];

/// Converts storefront HTML into plain text.
///
/// `<br>` variants become newlines, every other tag is dropped and the common
/// named entities are decoded. Only covers the markup platforms put in their
/// description columns; this is not an HTML parser.
pub fn strip_html(value: &str) -> String {
    let with_breaks = LINE_BREAK_REGEX.replace_all(value, "\n");
    let mut text = TAG_REGEX.replace_all(&with_breaks, "").into_owned();
    for (entity, decoded) in ENTITIES {
        text = text.replace(entity, decoded);
    }
    text.trim().to_string()
}

/// Returns `Some` for non-blank values.
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Splits a comma-separated tag cell, dropping blank entries.
pub fn parse_tags(value: &str) -> Option<Vec<String>> {
    let tags: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect();
    (!tags.is_empty()).then_some(tags)
}

/// Splits an image cell holding several URLs separated by `,` or `;`.
pub fn split_image_urls(value: &str) -> Vec<&str> {
    value
        .split([',', ';'])
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .collect()
}
