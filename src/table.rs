//! Parsed table and column access

use indexmap::IndexMap;

use crate::types::{CellValue, Row};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a whole-buffer parse: an optional header plus the data rows
///
/// The header and rows are owned, independent data; nothing aliases back into
/// the raw input buffer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Table {
    header: Option<Row>,
    rows: Vec<Row>,
}

impl Table {
    /// Assemble a table from retained rows, extracting the header if requested
    ///
    /// The header is the first retained row; an input with no retained rows has
    /// no header even when one was requested.
    pub(crate) fn new(mut rows: Vec<Row>, has_header: bool) -> Self {
        let header = if has_header && !rows.is_empty() {
            Some(rows.remove(0))
        } else {
            None
        };
        Table { header, rows }
    }

    /// The extracted header row, if one was requested and present
    pub fn header(&self) -> Option<&Row> {
        self.header.as_ref()
    }

    /// The data rows, header excluded
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// One value per row for a 0-based column index; `None` for short rows
    pub fn column(&self, column: usize) -> Vec<Option<&CellValue>> {
        column_values(&self.rows, column)
    }

    /// Header-name to column-index map, in header order
    ///
    /// Duplicate header names keep the first occurrence. Empty when there is no
    /// header.
    pub fn header_map(&self) -> IndexMap<String, usize> {
        let mut map = IndexMap::new();
        if let Some(header) = &self.header {
            for (idx, cell) in header.cells.iter().enumerate() {
                map.entry(cell.as_string()).or_insert(idx);
            }
        }
        map
    }

    /// Column access by header name; `None` if there is no such header
    pub fn column_by_name(&self, name: &str) -> Option<Vec<Option<&CellValue>>> {
        let index = *self.header_map().get(name)?;
        Some(self.column(index))
    }
}

/// Extract a single column across rows, substituting `None` for short rows
///
/// Never errors: a row lacking the column index contributes the null marker.
/// O(rows) time, no side effects.
pub fn column_values(rows: &[Row], column: usize) -> Vec<Option<&CellValue>> {
    rows.iter().map(|row| row.get(column)).collect()
}
