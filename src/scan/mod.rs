//! Single-pass tokenizing scanner for delimited text
//!
//! [`RowScanner`] is the character-level state machine that turns a decoded
//! character stream into rows of cells; [`coerce`] types each flushed token and
//! [`detect_line_ending`] picks a line-ending convention when none is configured.

mod coerce;
mod detect;
mod machine;

pub use coerce::coerce;
pub use detect::detect_line_ending;
pub use machine::RowScanner;
