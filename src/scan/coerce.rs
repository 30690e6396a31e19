//! Per-cell type coercion

use crate::types::CellValue;

/// Type a flushed token: full integer parse, else full float parse, else the
/// raw string
///
/// Applied once per delimiter- or line-terminated cell, at flush time. Quoted
/// cells bypass coercion entirely. Malformed numeric-looking tokens are not an
/// error; they stay strings.
pub fn coerce(raw: String) -> CellValue {
    if let Ok(int_val) = raw.parse::<i64>() {
        return CellValue::Int(int_val);
    }
    if let Ok(float_val) = raw.parse::<f64>() {
        return CellValue::Float(float_val);
    }
    CellValue::Str(raw)
}
