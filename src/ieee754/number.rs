/*
    Definition of `Float<E, N>` struct
*/

use super::*;
use crate::Number;

// Format parameters
impl<const E: usize, const N: usize> Float<E, N> {
    /// Bitwidth of the representation.
    pub const N: usize = N;

    /// Bitwidth of the exponent field.
    pub const E: usize = E;

    /// Radix, in this case, 2.
    pub const B: usize = 2;

    /// Number of (binary) digits when the significand is expressed
    /// as an integer. This is just `Self::M + 1`.
    pub const PREC: usize = N - E;

    /// Bitwidth of the mantissa field.
    pub const M: usize = Self::PREC - 1;

    /// Exponent of the largest finite floating-point value in
    /// this representation when it is in the form `(-1)^s b^e m`
    /// where `m` is a fraction between 1 and 2.
    pub const EMAX: i64 = i64::pow(2, (E - 1) as u32) - 1;

    /// Exponent of the smallest normal floating-point value in
    /// this representation when it is in the form `(-1)^s b^e m`
    /// where `m` is a fraction between 1 and 2.
    /// This is just `1 - Self::EMAX`.
    pub const EMIN: i64 = 1 - Self::EMAX;

    /// Exponent of the largest finite floating-point value in
    /// this representation when it is in the form `(-1)^s b^e c`
    /// where `c` is an integer.
    /// This is just `Self::EMAX - Self::M`.
    pub const EXPMAX: i64 = Self::EMAX - Self::M as i64;

    /// Exponent of the smallest floating-point value in
    /// this representation when it is in the form `(-1)^s b^e c`
    /// where `c` is an integer.
    /// This is just `Self::EMIN - Self::M`.
    pub const EXPMIN: i64 = Self::EMIN - Self::M as i64;

    /// Bitwidth of the NaN payload.
    /// This is just `Self::M - 1`.
    pub const NAN_PAYLOAD_SIZE: usize = Self::M - 1;

    /// The exponent field bias.
    /// This is just `Self::EMAX`.
    pub const BIAS: i64 = Self::EMAX;
}

// Constructors and getters
impl<const E: usize, const N: usize> Float<E, N> {
    /// Creates a new `Float` with `E` exponent bits and `N` total bits.
    /// Initializes the `Float` to +0.
    pub fn new() -> Self {
        Self::zero(false)
    }

    /// Returns an infinity with a particular sign
    /// using the same width parameters as this `Float`.
    pub fn infinity(sign: bool) -> Self {
        assert_valid_format!(E, N);
        Self {
            num: FloatNum::Infinity(sign),
        }
    }

    /// Returns a zero with a particular sign
    /// using the same width parameters as this `Float`.
    pub fn zero(sign: bool) -> Self {
        assert_valid_format!(E, N);
        Self {
            num: FloatNum::Number(sign, 0, bitvec![0; Self::PREC]),
        }
    }

    /// Returns an NaN value based on the specified sign, quiet bit
    /// and payload using the same width parameters as this `Float`.
    pub fn nan(sign: bool, quiet: bool, payload: impl Into<BitVec>) -> Self {
        assert_valid_format!(E, N);
        let bv = payload.into();
        assert_eq!(
            bv.len(),
            Self::NAN_PAYLOAD_SIZE,
            "expected a payload size of {}, received {}",
            Self::NAN_PAYLOAD_SIZE,
            bv.len()
        );
        Self {
            num: FloatNum::Nan(sign, quiet, bv),
        }
    }

    /// Returns the exponent of this `Float`, the weight of the least
    /// significant bit of the significand.
    /// The result is wrapped in an option since only finite
    /// numbers have a valid exponent.
    pub fn exponent(&self) -> Option<i64> {
        match self.num {
            FloatNum::Number(_, exp, _) => Some(exp),
            _ => None,
        }
    }

    /// Returns the (integer) significand of this `Float` as a `BitVec`.
    /// The result is wrapped in an option since only finite numbers
    /// have a valid significand.
    pub fn significand(&self) -> Option<BitVec> {
        match &self.num {
            FloatNum::Number(_, _, c) => Some(c.clone()),
            _ => None,
        }
    }

    /// Returns true if this `Float` encodes a subnormal number
    pub fn is_subnormal(&self) -> bool {
        match &self.num {
            FloatNum::Number(_, _, c) => c.any() && !c[Self::M],
            _ => false,
        }
    }

    /// Returns true if this `Float` encodes a normal number
    pub fn is_normal(&self) -> bool {
        match &self.num {
            FloatNum::Number(_, _, c) => c[Self::M],
            _ => false,
        }
    }

    /// Returns true if this `Float` encodes a quiet NaN.
    /// The result is wrapped in an option since only NaNs have a quiet bit.
    pub fn is_quiet_nan(&self) -> Option<bool> {
        match self.num {
            FloatNum::Nan(_, quiet, _) => Some(quiet),
            _ => None,
        }
    }

    /// Returns the NaN payload of this `Float` as a `BitVec`.
    /// The result is wrapped in an option since only a NaN has a payload.
    pub fn nan_payload(&self) -> Option<BitVec> {
        match &self.num {
            FloatNum::Nan(_, _, payload) => Some(payload.clone()),
            _ => None,
        }
    }
}

impl<const E: usize, const N: usize> Number for Float<E, N> {
    fn is_zero(&self) -> bool {
        match &self.num {
            FloatNum::Number(_, _, c) => c.not_any(),
            _ => false,
        }
    }

    fn is_infinity(&self) -> bool {
        matches!(self.num, FloatNum::Infinity(_))
    }

    fn is_nan(&self) -> bool {
        matches!(self.num, FloatNum::Nan(_, _, _))
    }

    fn sign(&self) -> bool {
        match self.num {
            FloatNum::Number(s, _, _) => s,
            FloatNum::Infinity(s) => s,
            FloatNum::Nan(s, _, _) => s,
        }
    }
}

// Implementing `Default` for `Float`
impl<const E: usize, const N: usize> Default for Float<E, N> {
    fn default() -> Self {
        Self::new()
    }
}
