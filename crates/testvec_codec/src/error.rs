//! Error types for bit-vector conversion and record I/O.

use std::io;

/// Errors that can occur while decoding binary strings or writing records.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The binary string to decode was empty.
    #[error("cannot decode an empty binary string")]
    Empty,

    /// A character outside `{'0', '1'}` was found in a binary string.
    #[error("invalid character '{character}' at position {position} in binary string")]
    InvalidBit {
        /// The offending character.
        character: char,
        /// Zero-based position of the character, counted from the MSB.
        position: usize,
    },

    /// An I/O error occurred while writing or reading a record.
    #[error("record I/O error: {0}")]
    Io(#[from] io::Error),
}
