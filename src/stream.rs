//! Row-at-a-time streaming
//!
//! [`RowCursor`] reads one row per call by reopening the file, seeking to a
//! saved byte offset, scanning until the next row boundary and closing the
//! file again. Only one row plus one read buffer is held in memory per call,
//! and the file handle is released on every exit path. The cursor yields
//! row-for-row identical output to the whole-buffer reader for the same input
//! and configuration.

use std::fs::File;
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;

use crate::error::{Error, Result};
use crate::options::{LineEnding, ReadOptions};
use crate::scan::{detect_line_ending, RowScanner};
use crate::source;
use crate::types::Row;

/// Streaming cursor over the rows of a tabular-text file
///
/// # Examples
///
/// ```no_run
/// use tabstream::{ReadOptions, RowCursor};
///
/// let mut cursor = RowCursor::open("data.csv", ReadOptions::new()).unwrap();
/// while let Some(row) = cursor.read_row().unwrap() {
///     println!("{:?}", row.to_strings());
/// }
/// ```
pub struct RowCursor {
    path: PathBuf,
    options: ReadOptions,
    encoding: &'static Encoding,
    line_ending: Option<LineEnding>,
    offset: u64,
    physical: u64,
    header: Option<Row>,
    done: bool,
}

impl RowCursor {
    /// Open a cursor at the start of a file
    ///
    /// The file is probed once so a missing or unreadable path surfaces here
    /// rather than on the first fetch; the probe handle is released before
    /// returning.
    pub fn open<P: AsRef<Path>>(path: P, options: ReadOptions) -> Result<Self> {
        let encoding = options.resolve_encoding()?;
        let path = path.as_ref().to_path_buf();
        File::open(&path)
            .map_err(|e| Error::Read(format!("Failed to open {}: {}", path.display(), e)))?;

        Ok(RowCursor {
            path,
            line_ending: options.line_ending,
            options,
            encoding,
            offset: 0,
            physical: 0,
            header: None,
            done: false,
        })
    }

    /// The header row, available once the first data row has been fetched
    pub fn headers(&self) -> Option<&Row> {
        self.header.as_ref()
    }

    /// Physical rows consumed so far, skipped leading rows included
    pub fn row_count(&self) -> u64 {
        self.physical
    }

    /// Saved byte offset into the (decompressed) source
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Fetch the next data row
    ///
    /// Returns `Ok(None)` at end of sequence — an explicit signal, not an
    /// error. When a header was requested it is consumed transparently before
    /// the first data row and exposed through [`headers`](RowCursor::headers).
    pub fn read_row(&mut self) -> Result<Option<Row>> {
        if self.options.has_header && self.header.is_none() && !self.done {
            self.header = self.next_retained()?;
        }
        self.next_retained()
    }

    /// Iterator over the remaining data rows
    pub fn rows(&mut self) -> RowIter<'_> {
        RowIter { cursor: self }
    }

    /// Next row at or after the configured start row
    fn next_retained(&mut self) -> Result<Option<Row>> {
        loop {
            match self.next_physical()? {
                None => return Ok(None),
                Some(row) if (row.index as usize) >= self.options.start_row => {
                    return Ok(Some(row));
                }
                Some(_) => continue,
            }
        }
    }

    /// Consume exactly one physical row from the saved offset
    fn next_physical(&mut self) -> Result<Option<Row>> {
        if self.done {
            return Ok(None);
        }

        let mut bytes = source::read_bytes_from(&self.path, self.offset)?;
        if self.offset == 0 {
            let bom = source::bom_length(self.encoding, &bytes);
            bytes.drain(..bom);
            self.offset += bom as u64;
        }
        if bytes.is_empty() {
            self.done = true;
            return Ok(None);
        }

        let text = source::decode(&bytes, self.encoding)?;

        // First fetch sees the whole file, so auto-detection picks the same
        // convention the whole-buffer reader would.
        let ending = match self.line_ending {
            Some(ending) => ending,
            None => {
                let detected = detect_line_ending(&text);
                self.line_ending = Some(detected);
                detected
            }
        };

        let scanned = {
            let mut scanner = RowScanner::new(&self.options, ending);
            let mut found = None;
            for (pos, ch) in text.char_indices() {
                if let Some(cells) = scanner.push(ch) {
                    found = Some((pos + ch.len_utf8(), cells));
                    break;
                }
            }
            // End of input flushes a final row without a trailing terminator.
            found.or_else(|| scanner.finish().map(|cells| (text.len(), cells)))
        };

        match scanned {
            Some((consumed, cells)) => {
                self.offset += source::encoded_width(self.encoding, &text[..consumed]);
                let row = Row::new(self.physical as u32, cells);
                self.physical += 1;
                Ok(Some(row))
            }
            None => {
                self.done = true;
                Ok(None)
            }
        }
    }
}

/// Iterator over cursor rows
pub struct RowIter<'a> {
    cursor: &'a mut RowCursor,
}

impl Iterator for RowIter<'_> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.read_row().transpose()
    }
}
