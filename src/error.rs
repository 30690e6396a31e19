//! Error types for tabular-text reading

use thiserror::Error;

/// Errors produced while opening, decoding or configuring a read
#[derive(Debug, Error)]
pub enum Error {
    /// File could not be opened, read or decompressed
    #[error("Read error: {0}")]
    Read(String),

    /// Input bytes are not valid under the configured encoding
    #[error("Input is not valid {encoding}")]
    Decode {
        /// Name of the encoding the bytes were declared to be in
        encoding: &'static str,
    },

    /// The configured encoding label is not a known encoding
    #[error("Unknown encoding label: {0:?}")]
    UnknownEncoding(String),

    /// A line-ending marker must be one or two characters
    #[error("Invalid line ending marker: must be one or two characters")]
    InvalidLineEnding,
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
