use std::collections::BTreeMap;

/// One CSV data line keyed by its header.
pub type Row = BTreeMap<String, String>;

/// Number of lines before the first data row (the header row).
pub const HEADER_ROWS: usize = 1;

/// Converts a 0-based data row index into the 1-based line number an operator
/// sees in a spreadsheet, counting the header line.
pub const fn display_row(data_index: usize) -> usize {
    data_index + HEADER_ROWS + 1
}
