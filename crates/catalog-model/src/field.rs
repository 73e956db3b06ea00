//! Canonical product fields and source-column field maps.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::row::Row;

/// Target attribute a source column can be mapped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalField {
    Name,
    /// English (localized) product name.
    NameEn,
    Description,
    Category,
    Price,
    CompareAtPrice,
    Sku,
    Color,
    Size,
    Stock,
    ImageUrl,
    Tags,
    Status,
    Brand,
    Materials,
    CareInstructions,
    /// Column is explicitly ignored.
    Unmapped,
}

impl CanonicalField {
    pub const ALL: [CanonicalField; 17] = [
        CanonicalField::Name,
        CanonicalField::NameEn,
        CanonicalField::Description,
        CanonicalField::Category,
        CanonicalField::Price,
        CanonicalField::CompareAtPrice,
        CanonicalField::Sku,
        CanonicalField::Color,
        CanonicalField::Size,
        CanonicalField::Stock,
        CanonicalField::ImageUrl,
        CanonicalField::Tags,
        CanonicalField::Status,
        CanonicalField::Brand,
        CanonicalField::Materials,
        CanonicalField::CareInstructions,
        CanonicalField::Unmapped,
    ];

    /// Fields a product cannot be imported without.
    pub const REQUIRED: [CanonicalField; 2] = [CanonicalField::Name, CanonicalField::Price];

    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalField::Name => "name",
            CanonicalField::NameEn => "name_en",
            CanonicalField::Description => "description",
            CanonicalField::Category => "category",
            CanonicalField::Price => "price",
            CanonicalField::CompareAtPrice => "compare_at_price",
            CanonicalField::Sku => "sku",
            CanonicalField::Color => "color",
            CanonicalField::Size => "size",
            CanonicalField::Stock => "stock",
            CanonicalField::ImageUrl => "image_url",
            CanonicalField::Tags => "tags",
            CanonicalField::Status => "status",
            CanonicalField::Brand => "brand",
            CanonicalField::Materials => "materials",
            CanonicalField::CareInstructions => "care_instructions",
            CanonicalField::Unmapped => "unmapped",
        }
    }

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CanonicalField {
    type Err = CatalogError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        CanonicalField::ALL
            .into_iter()
            .find(|field| field.as_str() == trimmed)
            .ok_or_else(|| CatalogError::UnknownField(s.to_string()))
    }
}

/// One source column assigned to a canonical field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    pub column: String,
    pub field: CanonicalField,
}

/// Ordered assignment of source columns to canonical fields.
///
/// Column names are compared exactly after trimming. A column appears at most
/// once; several columns may point at the same field, in which case the
/// earliest entry is the one read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldMap {
    entries: Vec<FieldMapping>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON array of `{"column": ..., "field": ...}` objects.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<FieldMapping> = serde_json::from_str(json)?;
        Ok(entries
            .into_iter()
            .map(|entry| (entry.column, entry.field))
            .collect())
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Assigns `column` to `field`, replacing any previous assignment of the
    /// same column in place.
    pub fn insert(&mut self, column: impl Into<String>, field: CanonicalField) {
        let column = column.into().trim().to_string();
        if column.is_empty() {
            return;
        }
        match self.entries.iter_mut().find(|entry| entry.column == column) {
            Some(existing) => existing.field = field,
            None => self.entries.push(FieldMapping { column, field }),
        }
    }

    pub fn get(&self, column: &str) -> Option<CanonicalField> {
        let column = column.trim();
        self.entries
            .iter()
            .find(|entry| entry.column == column)
            .map(|entry| entry.field)
    }

    /// Returns the authoritative source column for `field`.
    pub fn column_for(&self, field: CanonicalField) -> Option<&str> {
        if field == CanonicalField::Unmapped {
            return None;
        }
        self.entries
            .iter()
            .find(|entry| entry.field == field)
            .map(|entry| entry.column.as_str())
    }

    /// Reads the trimmed cell for `field` from `row`; missing lookups yield `""`.
    pub fn value<'r>(&self, row: &'r Row, field: CanonicalField) -> &'r str {
        self.column_for(field)
            .and_then(|column| row.get(column))
            .map_or("", |value| value.trim())
    }

    /// Overlays manual assignments on top of this map.
    ///
    /// An override pointing a column at a field takes that field over: any
    /// other column previously feeding it is demoted to
    /// [`CanonicalField::Unmapped`]. Columns overridden to `Unmapped` stay in
    /// the map so the decision is visible, but no longer feed any field.
    pub fn merge_override(&mut self, overrides: &FieldMap) {
        for entry in overrides.iter() {
            if entry.field != CanonicalField::Unmapped {
                for existing in &mut self.entries {
                    if existing.field == entry.field && existing.column != entry.column {
                        existing.field = CanonicalField::Unmapped;
                    }
                }
            }
            self.insert(entry.column.clone(), entry.field);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldMapping> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, CanonicalField)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (S, CanonicalField)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        for (column, field) in iter {
            map.insert(column, field);
        }
        map
    }
}
