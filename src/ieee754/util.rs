use num_bigint::{BigInt, BigUint, Sign};

use super::*;

// Converts a `BitVec` to `BigUint`
pub(crate) fn bitvec_to_biguint(bv: &BitVec) -> BigUint {
    let mut i = BigUint::default();
    for b in bv.iter_ones() {
        i.set_bit(b as u64, true);
    }
    i
}

// Converts a sign and `BitVec` magnitude to `BigInt`.
// A zero magnitude yields zero regardless of `sign`.
pub(crate) fn bitvec_to_bigint(sign: bool, bv: &BitVec) -> BigInt {
    let sign = if sign { Sign::Minus } else { Sign::Plus };
    BigInt::from_biguint(sign, bitvec_to_biguint(bv))
}
