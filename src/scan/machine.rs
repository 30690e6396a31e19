//! Character-level row scanner

use std::mem;

use super::coerce;
use crate::options::{LineEnding, ReadOptions};
use crate::types::CellValue;

/// Single-pass tokenizer turning a character stream into rows of cells
///
/// Feed characters left to right with [`push`](RowScanner::push); each line
/// boundary yields the completed row (possibly empty, for a blank line). Call
/// [`finish`](RowScanner::finish) at end of input to flush a final row that
/// lacks a trailing terminator.
///
/// All transient parse state lives in the scanner value itself, so every parse
/// pass owns its own state; a scanner is reset at each row boundary and is not
/// meant to be shared between concurrent parses.
///
/// Classification rules, in order:
///
/// 1. If the previous character armed a two-character line-ending lookahead and
///    this character completes the marker, the line ends here. A non-matching
///    character disarms the lookahead and is classified normally; the armed
///    first character is never appended to the token.
/// 2. Inside a quote, every character is kept verbatim (including delimiter and
///    line-ending characters) except the character that opened the quote, which
///    closes it and always emits the cell — even an empty one, so a quoted
///    empty cell is distinguishable from a skipped one. Quoted cells are never
///    coerced.
/// 3. Outside quotes, a delimiter flushes the current token as a cell, empty
///    tokens included — except directly after a closing quote, where the cell
///    was already emitted and the delimiter only terminates it.
/// 4. A quote character outside quotes opens quote mode and discards any stray
///    token content accumulated before it.
/// 5. A line-ending match flushes a non-empty trailing token and completes the
///    row.
/// 6. Anything else is appended to the current token.
pub struct RowScanner<'a> {
    delimiters: &'a str,
    quotes: &'a str,
    ending: LineEnding,
    in_quote: Option<char>,
    pending_break: bool,
    cell_closed: bool,
    token: String,
    cells: Vec<CellValue>,
}

impl<'a> RowScanner<'a> {
    /// Create a scanner for one parse pass
    pub fn new(options: &'a ReadOptions, ending: LineEnding) -> Self {
        RowScanner {
            delimiters: &options.delimiters,
            quotes: &options.quotes,
            ending,
            in_quote: None,
            pending_break: false,
            cell_closed: false,
            token: String::new(),
            cells: Vec::new(),
        }
    }

    /// Consume one character; returns the completed row at a line boundary
    pub fn push(&mut self, ch: char) -> Option<Vec<CellValue>> {
        if self.pending_break {
            self.pending_break = false;
            if Some(ch) == self.ending.second() {
                return Some(self.take_row());
            }
            // The armed first character stays dropped; fall through and
            // classify this one normally.
        }

        if let Some(open) = self.in_quote {
            if ch == open {
                let cell = CellValue::Str(mem::take(&mut self.token));
                self.cells.push(cell);
                self.in_quote = None;
                self.cell_closed = true;
            } else {
                self.token.push(ch);
            }
            return None;
        }

        if self.delimiters.contains(ch) {
            if self.cell_closed {
                // The quoted cell was emitted when its quote closed; this
                // delimiter only terminates it.
                self.cell_closed = false;
            } else {
                self.cells.push(coerce(mem::take(&mut self.token)));
            }
            return None;
        }

        if self.quotes.contains(ch) {
            // Drop stray characters seen before the opening quote.
            self.token.clear();
            self.in_quote = Some(ch);
            self.cell_closed = false;
            return None;
        }

        if ch == self.ending.first() {
            if self.ending.is_two_char() {
                self.pending_break = true;
                return None;
            }
            return Some(self.take_row());
        }

        self.cell_closed = false;
        self.token.push(ch);
        None
    }

    /// Flush at end of input, treating it as an implicit line boundary
    ///
    /// Returns the final partial row, if any characters contributed to one. An
    /// unterminated quote is not an error: its accumulated text is kept as an
    /// uncoerced string cell.
    pub fn finish(&mut self) -> Option<Vec<CellValue>> {
        if self.in_quote.take().is_some() {
            if !self.token.is_empty() {
                let cell = CellValue::Str(mem::take(&mut self.token));
                self.cells.push(cell);
            }
        } else if !self.token.is_empty() {
            self.cells.push(coerce(mem::take(&mut self.token)));
        }
        self.pending_break = false;
        self.cell_closed = false;
        if self.cells.is_empty() {
            None
        } else {
            Some(mem::take(&mut self.cells))
        }
    }

    fn take_row(&mut self) -> Vec<CellValue> {
        if !self.token.is_empty() {
            self.cells.push(coerce(mem::take(&mut self.token)));
        }
        self.in_quote = None;
        self.pending_break = false;
        self.cell_closed = false;
        mem::take(&mut self.cells)
    }
}
