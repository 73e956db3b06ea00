//! Source platform identity and export-format configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::field::CanonicalField;

/// Commerce platform a CSV export was produced by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformId {
    /// Shopify product export (one row per variant, tied together by `Handle`).
    Shopify,
    /// BASE item export (one row per item).
    Base,
    /// STORES item export (one row per item).
    Stores,
    /// Header set did not match any known platform.
    Unknown,
}

impl PlatformId {
    /// Every platform id, `Unknown` last.
    pub const ALL: [PlatformId; 4] = [
        PlatformId::Shopify,
        PlatformId::Base,
        PlatformId::Stores,
        PlatformId::Unknown,
    ];

    /// Returns the identifier as used in configuration and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformId::Shopify => "shopify",
            PlatformId::Base => "base",
            PlatformId::Stores => "stores",
            PlatformId::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, PlatformId::Unknown)
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        PlatformId::ALL
            .into_iter()
            .find(|id| id.as_str() == normalized)
            .ok_or_else(|| CatalogError::UnknownPlatform(s.to_string()))
    }
}

/// How rows of an export relate to products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupingMode {
    /// One product may span several rows sharing a group-by value.
    MultiRow,
    /// Every row is a complete product.
    None,
}

/// Static description of a supported platform's export format.
///
/// Header strings are matched exactly (after trimming), so the values here
/// must be kept byte-identical to what the platform writes.
#[derive(Debug, Clone, Copy)]
pub struct PlatformConfig {
    pub id: PlatformId,
    /// Human-readable platform name.
    pub display_name: &'static str,
    /// Headers that together identify this platform's exports.
    pub header_signature: &'static [&'static str],
    pub grouping: GroupingMode,
    /// Column whose value ties the rows of one product together.
    pub group_by: Option<&'static str>,
    /// Known column to canonical field assignments for this export format.
    pub default_field_map: &'static [(&'static str, CanonicalField)],
}

impl PlatformConfig {
    /// Returns the group-by column when this platform spreads products over
    /// multiple rows.
    pub fn multi_row_group_column(&self) -> Option<&'static str> {
        match (self.grouping, self.group_by) {
            (GroupingMode::MultiRow, Some(column)) if !column.trim().is_empty() => Some(column),
            _ => None,
        }
    }

    /// Looks up the default canonical field for a header.
    pub fn default_field_for(&self, header: &str) -> Option<CanonicalField> {
        let header = header.trim();
        self.default_field_map
            .iter()
            .find(|(column, _)| *column == header)
            .map(|(_, field)| *field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_id_parses_case_insensitively() {
        assert_eq!("Shopify".parse::<PlatformId>().unwrap(), PlatformId::Shopify);
        assert_eq!(" base ".parse::<PlatformId>().unwrap(), PlatformId::Base);
        assert!("woocommerce".parse::<PlatformId>().is_err());
    }

    #[test]
    fn group_column_requires_multi_row() {
        let flat = PlatformConfig {
            id: PlatformId::Base,
            display_name: "flat",
            header_signature: &[],
            grouping: GroupingMode::None,
            group_by: Some("Handle"),
            default_field_map: &[],
        };
        assert_eq!(flat.multi_row_group_column(), None);

        let grouped = PlatformConfig {
            grouping: GroupingMode::MultiRow,
            ..flat
        };
        assert_eq!(grouped.multi_row_group_column(), Some("Handle"));

        let missing = PlatformConfig {
            group_by: None,
            ..grouped
        };
        assert_eq!(missing.multi_row_group_column(), None);
    }
}
