//! Manual field maps stored as JSON files.
//!
//! A file holds an array of `{"column": ..., "field": ...}` objects, the same
//! shape a review UI produces when an operator corrects a mapping.

use std::fs;
use std::path::Path;

use catalog_model::{FieldMap, Result};

/// Reads a field map from `path`.
pub fn load_field_map(path: &Path) -> Result<FieldMap> {
    let json = fs::read_to_string(path)?;
    FieldMap::from_json_str(&json)
}

/// Writes `map` to `path` as pretty-printed JSON.
pub fn save_field_map(path: &Path, map: &FieldMap) -> Result<()> {
    fs::write(path, map.to_json_string()?)?;
    Ok(())
}
