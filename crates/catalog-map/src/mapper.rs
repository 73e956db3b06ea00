//! Default column-to-field maps and mapping summaries.

use std::collections::BTreeSet;

use catalog_model::{CanonicalField, FieldMap, FieldMapping, PlatformId};
use serde::Serialize;
use tracing::debug;

use crate::registry::platform_config;

/// Builds the field map for a detected platform from the headers actually
/// present in the file.
///
/// Only headers the platform's default map knows are included, in header
/// order. An unknown platform yields an empty map; the caller is expected
/// to supply a manual one.
pub fn get_default_field_map<S: AsRef<str>>(platform: PlatformId, headers: &[S]) -> FieldMap {
    let Some(config) = platform_config(platform) else {
        return FieldMap::new();
    };
    let map: FieldMap = headers
        .iter()
        .map(|header| header.as_ref().trim())
        .filter_map(|header| {
            config
                .default_field_for(header)
                .map(|field| (header.to_string(), field))
        })
        .collect();
    debug!(
        platform = %platform,
        header_count = headers.len(),
        mapped = map.len(),
        "default field map built"
    );
    map
}

/// Overview of how a field map covers a header row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MappingSummary {
    /// Columns feeding a canonical field, in map order.
    pub mapped: Vec<FieldMapping>,
    /// Headers that feed no field.
    pub unmapped_columns: Vec<String>,
    /// Required fields with no source column.
    pub missing_required: Vec<CanonicalField>,
    /// Map entries naming a column the file does not have.
    pub absent_columns: Vec<String>,
}

impl MappingSummary {
    pub fn is_complete(&self) -> bool {
        self.missing_required.is_empty()
    }
}

/// Summarizes `field_map` against the header row of a file.
pub fn summarize_mapping<S: AsRef<str>>(field_map: &FieldMap, headers: &[S]) -> MappingSummary {
    let present: BTreeSet<&str> = headers.iter().map(|h| h.as_ref().trim()).collect();
    let mut summary = MappingSummary::default();
    for entry in field_map.iter() {
        if !present.contains(entry.column.as_str()) {
            summary.absent_columns.push(entry.column.clone());
        } else if entry.field != CanonicalField::Unmapped {
            summary.mapped.push(entry.clone());
        }
    }
    for header in headers.iter().map(|h| h.as_ref().trim()) {
        let feeds_field = field_map
            .get(header)
            .is_some_and(|field| field != CanonicalField::Unmapped);
        if !feeds_field && !header.is_empty() {
            summary.unmapped_columns.push(header.to_string());
        }
    }
    summary.missing_required = CanonicalField::REQUIRED
        .into_iter()
        .filter(|field| {
            field_map
                .column_for(*field)
                .is_none_or(|column| !present.contains(column))
        })
        .collect();
    summary
}
