/*
    Numeric values of mixed representation
*/

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, Zero};
use thiserror::Error;

use crate::ieee754::Double;
use crate::{total_order, Number};

/// A number that is either a double-precision float or
/// an arbitrary-precision integer.
///
/// Values are ordered by their mathematical value regardless of the
/// representation, so `Numeric::Int(2)` and `Numeric::Float(2.0)` are equal.
/// NaN is equal to itself and less than every other value, which makes the
/// order total and lets `Numeric` implement `Eq` and `Ord`.
#[derive(Clone, Debug)]
pub enum Numeric {
    Float(f64),
    Int(BigInt),
}

/// Compares two numbers by mathematical value.
///
/// - an integer and a float of the same value are equal;
/// - `+0.0` and `-0.0` are equal;
/// - NaN is equal to NaN and less than everything else, including `-inf`;
/// - `-inf` and `+inf` lie below and above every integer.
///
/// Integers are compared against the exact binary value of a float,
/// so no precision is lost for large integers or fractional floats.
pub fn numeric(a: &Numeric, b: &Numeric) -> Ordering {
    total_order(a, b, partial_cmp_value(a, b))
}

/// Compares two floats in the same total order as [`numeric`].
pub fn numbers(a: &f64, b: &f64) -> Ordering {
    total_order(a, b, a.partial_cmp(b))
}

// IEEE-style comparison: `None` exactly when either side is NaN.
fn partial_cmp_value(a: &Numeric, b: &Numeric) -> Option<Ordering> {
    match (a, b) {
        (Numeric::Float(x), Numeric::Float(y)) => x.partial_cmp(y),
        (Numeric::Int(m), Numeric::Int(n)) => Some(m.cmp(n)),
        (Numeric::Float(x), Numeric::Int(n)) => Double::from(*x).partial_cmp_int(n),
        (Numeric::Int(m), Numeric::Float(y)) => Double::from(*y)
            .partial_cmp_int(m)
            .map(Ordering::reverse),
    }
}

impl Number for Numeric {
    fn is_zero(&self) -> bool {
        match self {
            Numeric::Float(x) => *x == 0.0,
            Numeric::Int(n) => n.is_zero(),
        }
    }

    fn is_infinity(&self) -> bool {
        matches!(self, Numeric::Float(x) if x.is_infinite())
    }

    fn is_nan(&self) -> bool {
        matches!(self, Numeric::Float(x) if x.is_nan())
    }

    fn sign(&self) -> bool {
        match self {
            Numeric::Float(x) => x.is_sign_negative(),
            Numeric::Int(n) => n.is_negative(),
        }
    }
}

impl Number for f64 {
    fn is_zero(&self) -> bool {
        *self == 0.0
    }

    fn is_infinity(&self) -> bool {
        self.is_infinite()
    }

    fn is_nan(&self) -> bool {
        f64::is_nan(*self)
    }

    fn sign(&self) -> bool {
        self.is_sign_negative()
    }
}

impl PartialEq for Numeric {
    fn eq(&self, other: &Self) -> bool {
        numeric(self, other) == Ordering::Equal
    }
}

impl Eq for Numeric {}

impl PartialOrd for Numeric {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Numeric {
    fn cmp(&self, other: &Self) -> Ordering {
        numeric(self, other)
    }
}

impl Default for Numeric {
    fn default() -> Self {
        Numeric::Int(BigInt::zero())
    }
}

// Conversions

impl From<f64> for Numeric {
    fn from(x: f64) -> Self {
        Numeric::Float(x)
    }
}

impl From<f32> for Numeric {
    fn from(x: f32) -> Self {
        // widening is exact, NaN stays NaN
        Numeric::Float(f64::from(x))
    }
}

impl From<BigInt> for Numeric {
    fn from(n: BigInt) -> Self {
        Numeric::Int(n)
    }
}

impl From<BigUint> for Numeric {
    fn from(n: BigUint) -> Self {
        Numeric::Int(BigInt::from(n))
    }
}

macro_rules! numeric_from_int {
    ($($T:ty),*) => {
        $(
            impl From<$T> for Numeric {
                fn from(n: $T) -> Self {
                    Numeric::Int(BigInt::from(n))
                }
            }
        )*
    };
}

numeric_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Float(x) => write!(f, "{}", x),
            Numeric::Int(n) => write!(f, "{}", n),
        }
    }
}

/// Error returned when text is neither an integer nor a float literal.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid numeric literal: {input:?}")]
pub struct ParseNumericError {
    input: String,
}

impl ParseNumericError {
    /// Returns the rejected text.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Numeric {
    type Err = ParseNumericError;

    /// Parses an integer literal as `Numeric::Int`, and anything else
    /// Rust accepts as an `f64` (`2.5`, `1e300`, `inf`, `NaN`) as `Numeric::Float`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if is_integer_literal(s) {
            if let Ok(n) = s.parse::<BigInt>() {
                return Ok(Numeric::Int(n));
            }
        }

        s.parse::<f64>()
            .map(Numeric::Float)
            .map_err(|_| ParseNumericError {
                input: s.to_string(),
            })
    }
}

// optional sign followed by at least one decimal digit
fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
