//! Whole-buffer reading
//!
//! Reads the entire input into memory, then runs one uninterrupted scan over
//! the decoded characters. Correctness over throughput: the buffer is fully
//! materialized and the scan has no suspension points.

use std::path::Path;

use crate::error::Result;
use crate::options::ReadOptions;
use crate::scan::{detect_line_ending, RowScanner};
use crate::source;
use crate::table::Table;
use crate::types::Row;

/// Parse a whole decoded buffer into a table
///
/// Physical rows are counted from the very first line; a row is retained once
/// its 1-based number exceeds `start_row`. When `has_header` is set, the first
/// retained row becomes the header.
///
/// # Examples
///
/// ```
/// use tabstream::{read_str, CellValue, ReadOptions};
///
/// let table = read_str("a,b,\"c,d\"\n1,2,3\n", &ReadOptions::new()).unwrap();
/// assert_eq!(table.rows()[0].to_strings(), vec!["a", "b", "c,d"]);
/// assert_eq!(table.rows()[1].cells[2], CellValue::Int(3));
/// ```
pub fn read_str(text: &str, options: &ReadOptions) -> Result<Table> {
    let ending = options
        .line_ending
        .unwrap_or_else(|| detect_line_ending(text));

    let mut scanner = RowScanner::new(options, ending);
    let mut rows = Vec::new();
    let mut physical = 0usize;

    let record = |physical: usize, cells, rows: &mut Vec<Row>| {
        if physical > options.start_row {
            rows.push(Row::new((physical - 1) as u32, cells));
        }
    };

    for ch in text.chars() {
        if let Some(cells) = scanner.push(ch) {
            physical += 1;
            record(physical, cells, &mut rows);
        }
    }
    // End of input acts as an implicit line boundary for a final partial row.
    if let Some(cells) = scanner.finish() {
        physical += 1;
        record(physical, cells, &mut rows);
    }

    Ok(Table::new(rows, options.has_header))
}

/// Read and parse a file into a table
///
/// The file is read in one blocking pass, gzip-decompressed when the extension
/// says so, decoded under the configured encoding (a leading BOM is skipped),
/// then parsed like [`read_str`].
///
/// # Examples
///
/// ```no_run
/// use tabstream::{read_path, ReadOptions};
///
/// let options = ReadOptions::new().with_header(true);
/// let table = read_path("data.csv", &options).unwrap();
/// println!("{} rows", table.len());
/// ```
pub fn read_path<P: AsRef<Path>>(path: P, options: &ReadOptions) -> Result<Table> {
    let encoding = options.resolve_encoding()?;
    let bytes = source::read_bytes(path.as_ref())?;
    let bom = source::bom_length(encoding, &bytes);
    let text = source::decode(&bytes[bom..], encoding)?;
    read_str(&text, options)
}
