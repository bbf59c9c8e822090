//! Error types for model construction and vector file sessions.

use std::io;

use testvec_codec::CodecError;

/// Errors that can occur while building schemas or running a vector session.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// A signal was declared with a width of zero bits.
    #[error("signal width must be at least 1 bit")]
    ZeroWidth,

    /// Two schema fields were declared with the same name.
    #[error("duplicate field '{0}' in port schema")]
    DuplicateField(String),

    /// A named field does not exist in the schema.
    #[error("unknown field '{0}' in port schema")]
    UnknownField(String),

    /// A record did not carry one token per schema field.
    #[error("record has {found} tokens but the schema expects {expected}")]
    FieldCountMismatch {
        /// Number of tokens found on the line.
        found: usize,
        /// Number of fields selected from the schema.
        expected: usize,
    },

    /// A binary string failed to decode.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// An I/O error occurred on the vector file handle.
    #[error("vector file I/O error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_width_display() {
        assert_eq!(
            ModelError::ZeroWidth.to_string(),
            "signal width must be at least 1 bit"
        );
    }

    #[test]
    fn duplicate_field_display() {
        assert_eq!(
            ModelError::DuplicateField("in_a".into()).to_string(),
            "duplicate field 'in_a' in port schema"
        );
    }

    #[test]
    fn field_count_mismatch_display() {
        let e = ModelError::FieldCountMismatch {
            found: 2,
            expected: 3,
        };
        assert_eq!(
            e.to_string(),
            "record has 2 tokens but the schema expects 3"
        );
    }

    #[test]
    fn codec_error_passes_through() {
        let e: ModelError = CodecError::Empty.into();
        assert_eq!(e.to_string(), "cannot decode an empty binary string");
    }
}
