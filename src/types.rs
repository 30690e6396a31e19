//! Type definitions for parsed tabular data

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single parsed cell value
///
/// Cells are typed at flush time by attempting an integer parse, then a float
/// parse, then falling back to the raw string. Quoted cells always stay strings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellValue {
    /// String value (also the fallback for malformed numeric tokens)
    Str(String),
    /// Integer value
    Int(i64),
    /// Float value
    Float(f64),
}

impl CellValue {
    /// Convert cell value to string
    pub fn as_string(&self) -> String {
        match self {
            CellValue::Str(s) => s.clone(),
            CellValue::Int(i) => itoa::Buffer::new().format(*i).to_string(),
            CellValue::Float(f) => ryu::Buffer::new().format(*f).to_string(),
        }
    }

    /// Borrow the string content, if this is a string cell
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Try to convert to integer
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CellValue::Int(i) => Some(*i),
            CellValue::Float(f) => Some(*f as i64),
            CellValue::Str(s) => s.parse().ok(),
        }
    }

    /// Try to convert to float
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(f) => Some(*f),
            CellValue::Int(i) => Some(*i as f64),
            CellValue::Str(s) => s.parse().ok(),
        }
    }

    /// Check if this cell holds a numeric value
    pub fn is_numeric(&self) -> bool {
        matches!(self, CellValue::Int(_) | CellValue::Float(_))
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Str(s) => f.write_str(s),
            _ => f.write_str(&self.as_string()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Str(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Str(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

/// One logical line of the input, as an ordered sequence of cells
///
/// `index` is the 0-based physical line index the row came from. Rows skipped by
/// a start-row offset leave gaps, so indexes stay comparable between the
/// whole-buffer and streaming readers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Row {
    /// Physical line index (0-based)
    pub index: u32,
    /// Cells in this row
    pub cells: Vec<CellValue>,
}

impl Row {
    /// Create a new row
    pub fn new(index: u32, cells: Vec<CellValue>) -> Self {
        Row { index, cells }
    }

    /// Get cell at column index
    pub fn get(&self, col: usize) -> Option<&CellValue> {
        self.cells.get(col)
    }

    /// Get number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if row has no cells (a blank physical line)
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Convert row to vector of strings
    pub fn to_strings(&self) -> Vec<String> {
        self.cells.iter().map(|c| c.as_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_value_conversions() {
        let val = CellValue::Int(42);
        assert_eq!(val.as_i64(), Some(42));
        assert_eq!(val.as_f64(), Some(42.0));
        assert!(val.is_numeric());

        let val = CellValue::Str("2.5".to_string());
        assert_eq!(val.as_f64(), Some(2.5));
        assert!(!val.is_numeric());
    }

    #[test]
    fn test_cell_value_display() {
        assert_eq!(CellValue::Int(-7).to_string(), "-7");
        assert_eq!(CellValue::Float(1.5).to_string(), "1.5");
        assert_eq!(CellValue::Str("abc".into()).to_string(), "abc");
    }

    #[test]
    fn test_row_access() {
        let row = Row::new(0, vec![CellValue::from("a"), CellValue::Int(1)]);
        assert_eq!(row.len(), 2);
        assert_eq!(row.get(1), Some(&CellValue::Int(1)));
        assert_eq!(row.get(5), None);
        assert_eq!(row.to_strings(), vec!["a", "1"]);
    }
}
