//! Integer to binary-string conversion using two's-complement encoding.
//!
//! All conversions operate on arbitrary-precision integers so that values
//! wider than any machine word (33+ bits and beyond) behave identically to
//! narrow ones. Binary strings are MSB first: index 0 of the string is the
//! most significant bit.

use num_bigint::{BigInt, BigUint, Sign};

use crate::error::CodecError;

/// Returns the maximum unsigned value representable in `width` bits, `2^width - 1`.
pub fn pow2m1(width: u64) -> BigUint {
    (BigUint::from(1u8) << width) - 1u8
}

/// Computes `base^exp` as an arbitrary-precision integer.
pub fn pow(base: u64, exp: u32) -> BigUint {
    BigUint::from(base).pow(exp)
}

/// Returns the minimal number of bits needed to hold `value` in two's complement.
///
/// Zero takes one bit. Negative values get one extra bit to hold the sign.
pub fn min_width(value: &BigInt) -> u64 {
    match value.sign() {
        Sign::NoSign => 1,
        Sign::Plus => value.magnitude().bits(),
        Sign::Minus => value.magnitude().bits() + 1,
    }
}

/// Converts `value` to a binary string, MSB first.
///
/// If `value` is negative, the two's-complement representation `2^width + value`
/// is rendered. A negative value that does not fit in `width` bits wraps
/// silently modulo `2^width`; hardware registers wrap on overflow and this
/// conversion deliberately does the same.
///
/// If `width` is `None`, the minimal width from [`min_width`] is used. The
/// rendered digits are left-padded with `'0'` up to `width`; padding never
/// truncates. When the digits exceed `width` and `truncate` is true, only the
/// rightmost `width` characters (the low-order bits) are kept; with `truncate`
/// false the full string is returned unmodified.
pub fn encode(value: &BigInt, width: Option<u64>, truncate: bool) -> String {
    let width = width.unwrap_or_else(|| min_width(value));
    let pattern = to_pattern(value, width);
    let digits = pattern.to_str_radix(2);
    let rendered = if (digits.len() as u64) < width {
        format!("{:0>pad$}", digits, pad = width as usize)
    } else {
        digits
    };
    if truncate && (rendered.len() as u64) > width {
        rendered[rendered.len() - width as usize..].to_string()
    } else {
        rendered
    }
}

/// Converts `value` to a binary string at its minimal width, truncating.
///
/// Shorthand for `encode(value, None, true)`.
pub fn encode_min(value: &BigInt) -> String {
    encode(value, None, true)
}

/// Reduces `value` to its unsigned bit pattern in `[0, 2^width)`.
fn to_pattern(value: &BigInt, width: u64) -> BigUint {
    let modulus = BigUint::from(1u8) << width;
    let rem = value.magnitude() % &modulus;
    match value.sign() {
        Sign::Minus if rem != BigUint::from(0u8) => modulus - rem,
        Sign::Minus => BigUint::from(0u8),
        _ => rem,
    }
}

/// Converts a binary string (MSB first) to an integer.
///
/// With `signed` set and a leading `'1'`, the string is interpreted as a
/// two's-complement value and the result is negative. Any character outside
/// `{'0', '1'}` fails with [`CodecError::InvalidBit`] rather than producing
/// an undefined result; an empty string fails with [`CodecError::Empty`].
pub fn decode(bits: &str, signed: bool) -> Result<BigInt, CodecError> {
    if bits.is_empty() {
        return Err(CodecError::Empty);
    }
    let mut magnitude = BigUint::from(0u8);
    for (position, character) in bits.chars().enumerate() {
        let bit = match character {
            '0' => 0u8,
            '1' => 1u8,
            _ => {
                return Err(CodecError::InvalidBit {
                    character,
                    position,
                })
            }
        };
        magnitude = (magnitude << 1u8) + bit;
    }
    if signed && bits.starts_with('1') {
        let modulus = BigUint::from(1u8) << bits.len();
        Ok(BigInt::from(magnitude) - BigInt::from(modulus))
    } else {
        Ok(BigInt::from(magnitude))
    }
}

/// Renders a bit sequence as a string, treating index 0 as the LSB.
///
/// With `big_endian` set (the conventional output), the result is MSB first,
/// so the sequence is reversed. Nonzero elements render as `'1'`.
pub fn vec_to_string(bits: &[u8], big_endian: bool) -> String {
    let mut word = String::with_capacity(bits.len());
    let render = |bit: &u8| if *bit == 0 { '0' } else { '1' };
    if big_endian {
        for bit in bits.iter().rev() {
            word.push(render(bit));
        }
    } else {
        for bit in bits {
            word.push(render(bit));
        }
    }
    word
}
