//! # tabstream
//!
//! Tolerant tabular-text (CSV-style) reader with typed cells.
//!
//! Parses a whole document — or one record at a time in streaming mode — into
//! rows of typed cell values, handling:
//!
//! - **Multiple delimiters**: any character of a configured set ends a cell
//! - **Multiple quote characters**: any character of a configured set opens a
//!   quoted cell; only the same character closes it
//! - **Embedded newlines** inside quoted cells
//! - **Line-ending conventions**: `\n`, `\r\n`, `\r` or a custom one- or
//!   two-character marker, auto-detected when not configured
//! - **Header rows** and an arbitrary **start row** for skipping leading lines
//! - **Typed cells**: integer, then float, then string — per cell, at flush time
//!
//! The design favors correctness over throughput: the whole-buffer reader
//! materializes the input and makes a single character-level pass over it.
//!
//! # Whole-buffer reading
//!
//! ```
//! use tabstream::{read_str, CellValue, ReadOptions};
//!
//! let options = ReadOptions::new().with_header(true);
//! let table = read_str("name,age\nAlice,30\n", &options).unwrap();
//!
//! assert_eq!(table.header().unwrap().to_strings(), vec!["name", "age"]);
//! assert_eq!(table.rows()[0].cells[1], CellValue::Int(30));
//! assert_eq!(table.column_by_name("age").unwrap()[0], Some(&CellValue::Int(30)));
//! ```
//!
//! # Streaming
//!
//! ```no_run
//! use tabstream::{ReadOptions, RowCursor};
//!
//! let mut cursor = RowCursor::open("data.csv", ReadOptions::new()).unwrap();
//! while let Some(row) = cursor.read_row().unwrap() {
//!     println!("{:?}", row.to_strings());
//! }
//! ```
//!
//! The streaming cursor reopens the file and seeks per fetch, holds one row
//! plus one read buffer in memory, and yields row-for-row identical output to
//! the whole-buffer reader for the same input and configuration.

pub mod error;
pub mod options;
pub mod reader;
pub mod scan;
mod source;
pub mod stream;
pub mod table;
pub mod types;

pub use error::{Error, Result};
pub use options::{LineEnding, ReadOptions};
pub use reader::{read_path, read_str};
pub use stream::{RowCursor, RowIter};
pub use table::{column_values, Table};
pub use types::{CellValue, Row};
