//! Conversion between integers and two's-complement binary strings, plus the
//! comma-separated record format shared with HDL testbenches.
//!
//! This crate is the interchange layer between software models and hardware
//! simulations: values are rendered as fixed-width strings of `'0'`/`'1'`
//! characters (MSB first), joined into one record per line, and parsed back
//! on the comparison side.

#![warn(missing_docs)]

pub mod bits;
pub mod error;
pub mod record;

pub use bits::{decode, encode, encode_min, min_width, pow, pow2m1, vec_to_string};
pub use error::CodecError;
pub use record::{format_record, read_record, write_record, Token};
