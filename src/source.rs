//! File input and text decoding
//!
//! The scanner consumes decoded text, never raw bytes; everything byte-shaped
//! lives here. Gzip-compressed inputs are detected from the file extension.

use std::borrow::Cow;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use flate2::read::GzDecoder;

use crate::error::{Error, Result};

fn is_gzip(path: &Path) -> bool {
    path.to_str().unwrap_or("").ends_with(".gz")
}

/// Read a file's bytes starting at `offset`, decompressing gzip inputs
///
/// The file handle is scoped to this call and released on every exit path.
/// Gzip streams cannot seek, so compressed inputs are decompressed in full and
/// the offset applied to the decompressed bytes.
pub(crate) fn read_bytes_from(path: &Path, offset: u64) -> Result<Vec<u8>> {
    let file = File::open(path)
        .map_err(|e| Error::Read(format!("Failed to open {}: {}", path.display(), e)))?;

    if is_gzip(path) {
        let mut decoder = GzDecoder::new(file);
        let mut bytes = Vec::new();
        decoder
            .read_to_end(&mut bytes)
            .map_err(|e| Error::Read(format!("Failed to decompress {}: {}", path.display(), e)))?;
        let skip = (offset as usize).min(bytes.len());
        bytes.drain(..skip);
        Ok(bytes)
    } else {
        let mut file = file;
        file.seek(SeekFrom::Start(offset))
            .map_err(|e| Error::Read(format!("Failed to seek {}: {}", path.display(), e)))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|e| Error::Read(format!("Failed to read {}: {}", path.display(), e)))?;
        Ok(bytes)
    }
}

/// Read a whole file, decompressing gzip inputs
pub(crate) fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    read_bytes_from(path, 0)
}

/// Length of a leading byte-order mark matching `encoding`, in bytes
pub(crate) fn bom_length(encoding: &'static Encoding, bytes: &[u8]) -> usize {
    if encoding == UTF_8 && bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        3
    } else if encoding == UTF_16LE && bytes.starts_with(&[0xFF, 0xFE]) {
        2
    } else if encoding == UTF_16BE && bytes.starts_with(&[0xFE, 0xFF]) {
        2
    } else {
        0
    }
}

/// Strictly decode bytes under `encoding`
///
/// Malformed sequences are surfaced as [`Error::Decode`], never replaced.
pub(crate) fn decode<'a>(bytes: &'a [u8], encoding: &'static Encoding) -> Result<Cow<'a, str>> {
    let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
    if had_errors {
        return Err(Error::Decode {
            encoding: encoding.name(),
        });
    }
    Ok(text)
}

/// Byte length of decoded text when re-encoded in the source encoding
///
/// Used by the streaming cursor to advance its byte offset past consumed rows:
/// UTF-8 is the identity, UTF-16 is two bytes per code unit, and legacy
/// encodings round-trip through an encoder.
pub(crate) fn encoded_width(encoding: &'static Encoding, text: &str) -> u64 {
    if encoding == UTF_8 {
        text.len() as u64
    } else if encoding == UTF_16LE || encoding == UTF_16BE {
        (text.encode_utf16().count() * 2) as u64
    } else {
        let (bytes, _, _) = encoding.encode(text);
        bytes.len() as u64
    }
}
