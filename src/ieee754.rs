/*
    IEEE-754 binary floating-point numbers
*/

use bitvec::prelude::Lsb0;

macro_rules! bitvec {
    [ $($t:tt)* ] => {
        {
            bitvec::bitvec![u32, Lsb0; $($t)*]
        }
    };
}

macro_rules! assert_valid_format {
    ($E:expr, $N:expr) => {
        assert!(
            (2 <= $E) && ($E <= 60),
            "invalid exponent width, must be 2 <= E <= 60: {}",
            $E
        );
        assert!(
            (2 <= ($N - $E)),
            "invalid total width, must be 2 + E <= N: {}",
            $N
        );
    };
}

mod cmp;
mod convert;
mod number;
mod util;

/// Bit storage used for significands and NaN payloads.
/// Bit `0` is the least significant bit.
pub type BitVec = bitvec::prelude::BitVec<u32, Lsb0>;

// Minimal floating-point encoding grouped by classification
#[derive(Clone, Debug)]
enum FloatNum {
    // signed zero or finite number
    // => (sign, exponent, significand)
    Number(bool, i64, BitVec),
    // infinity (+/-)
    // => (sign)
    Infinity(bool),
    // not-a-number
    // => (sign, quiet, payload)
    Nan(bool, bool, BitVec),
}

/** A floating-point number as specified by the IEEE-754 standard.
 *
 * The generics `E` and `N` specify the number of bits in the
 * exponent field and in the entire float overall.
 *
 * A finite `Float` is stored as a sign `s`, an integer significand `c`
 * and an exponent `exp` so that its exact value is `(-1)^s * c * 2^exp`.
 * Nothing is rounded when decoding, so the value can be compared
 * exactly against arbitrary-precision integers.
 *
 */
#[derive(Clone, Debug)]
pub struct Float<const E: usize, const N: usize> {
    num: FloatNum, // number encoding
}

/// Alias for `Float<15, 128>` (quad-precision number)
pub type Quad = Float<15, 128>;
/// Alias for `Float<11, 64>` (double-precision number)
pub type Double = Float<11, 64>;
/// Alias for `Float<8, 32>` (single-precision number)
pub type Single = Float<8, 32>;
/// Alias for `Float<5, 16>` (half-precision number)
pub type Half = Float<5, 16>;
