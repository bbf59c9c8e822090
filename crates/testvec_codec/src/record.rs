//! The line-oriented record format of test-vector files.
//!
//! A record is an ordered sequence of tokens rendered on one line: tokens are
//! joined by `','` and the line ends with a single `'\n'`. There is no header,
//! footer, or escaping; the simulation side parses each line positionally.

use std::fmt;
use std::io::Write;

use num_bigint::BigInt;

use crate::bits::encode_min;
use crate::error::CodecError;

/// One value of a record: either an integer to be encoded at minimal width,
/// or an already-formatted binary string written verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// An integer, rendered via [`encode_min`](crate::encode_min).
    Num(BigInt),
    /// A pre-formatted binary string, written as-is.
    Bits(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Num(n) => f.write_str(&encode_min(n)),
            Token::Bits(s) => f.write_str(s),
        }
    }
}

impl From<BigInt> for Token {
    fn from(n: BigInt) -> Self {
        Token::Num(n)
    }
}

impl From<i64> for Token {
    fn from(n: i64) -> Self {
        Token::Num(BigInt::from(n))
    }
}

impl From<u64> for Token {
    fn from(n: u64) -> Self {
        Token::Num(BigInt::from(n))
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Token::Bits(s.to_string())
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Token::Bits(s)
    }
}

/// Renders one record line from `values`, including the trailing newline.
pub fn format_record(values: &[Token]) -> String {
    let mut line = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            line.push(',');
        }
        match value {
            Token::Num(n) => line.push_str(&encode_min(n)),
            Token::Bits(s) => line.push_str(s),
        }
    }
    line.push('\n');
    line
}

/// Appends one record line to `out`.
///
/// The line is formatted in full before a single write, so a failing sink
/// never receives a partial record followed by a newline. No flush is
/// performed; the caller owns the handle for the duration of the session.
pub fn write_record<W: Write>(out: &mut W, values: &[Token]) -> Result<(), CodecError> {
    out.write_all(format_record(values).as_bytes())?;
    Ok(())
}

/// Splits one record line back into its tokens.
///
/// The trailing line terminator is trimmed; the tokens are returned in
/// positional order, still as binary strings.
pub fn read_record(line: &str) -> Vec<&str> {
    line.trim_end_matches(['\r', '\n']).split(',').collect()
}
