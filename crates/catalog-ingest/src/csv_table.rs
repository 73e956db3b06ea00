//! CSV table loading.
//!
//! The first record is the header row. Headers and cells are trimmed and a
//! UTF-8 BOM is stripped from headers; every later record becomes a [`Row`]
//! keyed by header name.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use catalog_model::Row;
use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};

/// A CSV export split into its header row and header-keyed data rows.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().to_string()
}

/// Reads a CSV file from disk.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv_from_reader(file, path)
}

/// Reads CSV data from any reader; `origin` is only used in error messages.
///
/// Short records are padded with empty cells and cells beyond the header row
/// are ignored. When a header repeats, the first column with that name wins.
pub fn read_csv_from_reader<R: Read>(reader: R, origin: &Path) -> Result<CsvTable> {
    let parse_error = |source: csv::Error| IngestError::CsvParse {
        path: PathBuf::from(origin),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut records = reader.records();

    let headers: Vec<String> = match records.next() {
        Some(record) => record
            .map_err(parse_error)?
            .iter()
            .map(normalize_header)
            .collect(),
        None => {
            return Err(IngestError::EmptyCsv {
                path: origin.to_path_buf(),
            });
        }
    };

    let mut rows = Vec::new();
    for record in records {
        let record = record.map_err(parse_error)?;
        let mut row = Row::new();
        for (idx, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            let value = record.get(idx).map(normalize_cell).unwrap_or_default();
            row.entry(header.clone()).or_insert(value);
        }
        rows.push(row);
    }
    debug!(
        origin = %origin.display(),
        columns = headers.len(),
        rows = rows.len(),
        "csv loaded"
    );
    Ok(CsvTable { headers, rows })
}
