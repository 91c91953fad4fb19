/*
    Exact comparison of `Float<E, N>` against integers
*/

use std::cmp::Ordering;

use num_bigint::BigInt;
use num_traits::Signed;

use super::util::bitvec_to_bigint;
use super::*;

impl<const E: usize, const N: usize> Float<E, N> {
    /// Compares the exact value of this `Float` with an integer.
    ///
    /// Infinities lie beyond every integer. Signed zeros both equal `0`.
    /// Returns `None` if this `Float` is a NaN.
    pub fn partial_cmp_int(&self, n: &BigInt) -> Option<Ordering> {
        match &self.num {
            FloatNum::Nan(_, _, _) => None,
            FloatNum::Infinity(false) => Some(Ordering::Greater),
            FloatNum::Infinity(true) => Some(Ordering::Less),
            FloatNum::Number(s, exp, c) => Some(cmp_finite_int(*s, *exp, c, n)),
        }
    }
}

// Compares `(-1)^s * c * 2^exp` against `n` without rounding.
fn cmp_finite_int(s: bool, exp: i64, c: &BitVec, n: &BigInt) -> Ordering {
    let x = bitvec_to_bigint(s, c);

    // differing signs decide without scaling
    let sign_ord = x.signum().cmp(&n.signum());
    if sign_ord != Ordering::Equal {
        return sign_ord;
    }

    // scale whichever side has the fractional part
    let shift = exp.unsigned_abs() as usize;
    if exp >= 0 {
        (x << shift).cmp(n)
    } else {
        x.cmp(&(n << shift))
    }
}

impl<const E: usize, const N: usize> PartialEq<BigInt> for Float<E, N> {
    fn eq(&self, other: &BigInt) -> bool {
        self.partial_cmp_int(other) == Some(Ordering::Equal)
    }
}

impl<const E: usize, const N: usize> PartialOrd<BigInt> for Float<E, N> {
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        self.partial_cmp_int(other)
    }
}
