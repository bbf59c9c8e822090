//! Fixed-width signal value holders.
//!
//! A [`Signal`] stores the raw bit pattern of one hardware signal as an
//! unsigned integer in `[0, 2^width)`. Values wrap on overflow the way a
//! hardware register does; the wrap is deliberate, not an error.

use std::hash::{Hash, Hasher};

use num_bigint::{BigInt, BigUint, RandBigInt, Sign};
use rand::Rng;
use testvec_codec::{decode, encode, pow2m1, CodecError};

use crate::error::ModelError;

/// Direction of a port from the perspective of the entity under test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Driven into the entity by the testbench.
    Input,
    /// Driven by the entity, checked by the scoreboard.
    Output,
    /// Bidirectional.
    Inout,
    /// Internal to the model, never written to a vector file.
    Local,
}

/// A fixed-width value holder for one hardware signal.
///
/// A signal is either a bus of `width` bits or "single-ended" (a lone
/// `std_logic`, width 1). The distinction matters for code generation, where
/// single-ended signals use scalar drive/load procedures.
#[derive(Clone, Debug)]
pub struct Signal {
    mode: Mode,
    width: u64,
    value: BigUint,
    single: bool,
    downto: Option<(String, String)>,
    to_bounds: Option<(String, String)>,
}

impl Signal {
    /// Creates a bus signal of the given width, initialized to zero.
    pub fn new(mode: Mode, width: u64) -> Result<Self, ModelError> {
        if width == 0 {
            return Err(ModelError::ZeroWidth);
        }
        Ok(Self {
            mode,
            width,
            value: BigUint::from(0u8),
            single: false,
            downto: None,
            to_bounds: None,
        })
    }

    /// Creates a single-ended (1-bit scalar) signal, initialized to zero.
    pub fn single(mode: Mode) -> Self {
        Self {
            mode,
            width: 1,
            value: BigUint::from(0u8),
            single: true,
            downto: None,
            to_bounds: None,
        }
    }

    /// Sets the initial value, wrapping modulo `max() + 1`.
    pub fn with_value(mut self, value: impl Into<BigInt>) -> Self {
        self.set_num(&value.into());
        self
    }

    /// Overrides the generated VHDL range with explicit `downto` bounds.
    ///
    /// The bounds are emitted verbatim, so symbolic expressions like generic
    /// names are allowed.
    pub fn with_downto(mut self, msb: impl Into<String>, lsb: impl Into<String>) -> Self {
        self.downto = Some((msb.into(), lsb.into()));
        self
    }

    /// Overrides the generated VHDL range with explicit ascending `to` bounds.
    pub fn with_to(mut self, low: impl Into<String>, high: impl Into<String>) -> Self {
        self.to_bounds = Some((low.into(), high.into()));
        self
    }

    /// Returns the direction of this signal.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the number of bits allotted to this signal.
    pub fn width(&self) -> u64 {
        self.width
    }

    /// Checks whether the signal is a scalar rather than an array type.
    pub fn is_single_ended(&self) -> bool {
        self.single
    }

    /// Returns the explicit `downto` bounds, if set.
    pub fn downto(&self) -> Option<(&str, &str)> {
        self.downto.as_ref().map(|(m, l)| (m.as_str(), l.as_str()))
    }

    /// Returns the explicit `to` bounds, if set.
    pub fn to_bounds(&self) -> Option<(&str, &str)> {
        self.to_bounds
            .as_ref()
            .map(|(l, h)| (l.as_str(), h.as_str()))
    }

    /// Returns the maximum value storable in the allotted bits, inclusive.
    pub fn max(&self) -> BigUint {
        pow2m1(self.width)
    }

    /// Returns the minimum storable value, inclusive. Always zero.
    pub fn min(&self) -> BigUint {
        BigUint::from(0u8)
    }

    /// Sets the value to a uniformly random integer in `[min(), max()]`.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) -> &mut Self {
        let bound = self.max() + 1u8;
        self.value = rng.gen_biguint_below(&bound);
        self
    }

    /// Stores an integer value, wrapping modulo `max() + 1`.
    ///
    /// Negative values are stored as their two's-complement bit pattern.
    pub fn set_num(&mut self, value: &BigInt) {
        let modulus = BigUint::from(1u8) << self.width;
        let rem = value.magnitude() % &modulus;
        self.value = match value.sign() {
            Sign::Minus if rem != BigUint::from(0u8) => modulus - rem,
            Sign::Minus => BigUint::from(0u8),
            _ => rem,
        };
    }

    /// Stores a binary-string value.
    ///
    /// When the string is longer than the signal's width, only the rightmost
    /// `width` characters are kept. With `signed` set, the kept string is
    /// interpreted as two's complement before being stored back as a bit
    /// pattern. Malformed strings fail without modifying the signal.
    pub fn set_bits(&mut self, bits: &str, signed: bool) -> Result<(), CodecError> {
        // trim by characters, not bytes: arbitrary input must reach decode
        // as a typed error rather than panic on a char boundary
        let count = bits.chars().count() as u64;
        let kept = if count > self.width {
            let skip = (count - self.width) as usize;
            let start = bits
                .char_indices()
                .nth(skip)
                .map(|(i, _)| i)
                .unwrap_or(bits.len());
            &bits[start..]
        } else {
            bits
        };
        let value = decode(kept, signed)?;
        self.set_num(&value);
        Ok(())
    }

    /// Accesses the stored bit pattern as an unsigned integer.
    pub fn as_uint(&self) -> &BigUint {
        &self.value
    }

    /// Interprets the stored bit pattern as a two's-complement signed integer.
    pub fn as_signed(&self) -> BigInt {
        if self.value.bits() == self.width {
            // MSB set
            BigInt::from(self.value.clone()) - BigInt::from(BigUint::from(1u8) << self.width)
        } else {
            BigInt::from(self.value.clone())
        }
    }

    /// Renders the value as a binary string of exactly `width` characters,
    /// MSB first.
    pub fn as_bits(&self) -> String {
        encode(&BigInt::from(self.value.clone()), Some(self.width), true)
    }
}

// Equality intentionally ignores mode and range bounds: two holders are equal
// iff width, value, and the single-ended flag all match.
impl PartialEq for Signal {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.value == other.value && self.single == other.single
    }
}

impl Eq for Signal {}

impl Hash for Signal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.width.hash(state);
        self.value.hash(state);
        self.single.hash(state);
    }
}
