//! CSV loading for product-catalog imports.
//!
//! Produces the ordered header list and header-keyed rows the mapping and
//! transform stages consume. Quoting and escaping are handled by the `csv`
//! crate.

pub mod csv_table;
pub mod error;

pub use csv_table::{CsvTable, read_csv_from_reader, read_csv_table};
pub use error::{IngestError, Result};
