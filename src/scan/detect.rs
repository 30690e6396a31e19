//! Line-ending auto-detection

use memchr::{memchr_iter, memmem};

use crate::options::LineEnding;

/// Pick the line-ending convention used by a buffer
///
/// Counts occurrences of `\r\n`, lone `\n` and lone `\r` and returns the most
/// frequent; ties prefer `\r\n` over `\n` over `\r`. A buffer with no line
/// breaks falls back to the platform convention. Used only when no marker was
/// configured.
pub fn detect_line_ending(text: &str) -> LineEnding {
    let bytes = text.as_bytes();
    let crlf = memmem::find_iter(bytes, b"\r\n").count();
    let lf = memchr_iter(b'\n', bytes).count() - crlf;
    let cr = memchr_iter(b'\r', bytes).count() - crlf;

    if crlf >= lf && crlf >= cr && crlf > 0 {
        LineEnding::CRLF
    } else if lf >= cr && lf > 0 {
        LineEnding::LF
    } else if cr > 0 {
        LineEnding::CR
    } else {
        LineEnding::platform_default()
    }
}
