/*
    Conversions to `Float<E, N>`
*/

use bitvec::field::BitField;

use super::*;

// Utility
impl<const E: usize, const N: usize> Float<E, N> {
    // Splices a packed floating-point representation into
    // the sign, exponent, and mantissa field.
    // Does not check if `bv` has the correct number of bits.
    #[inline]
    fn split_packed(bv: &BitVec) -> (bool, u64, BitVec) {
        (
            Self::packed_sign(bv),
            Self::packed_exponent(bv),
            Self::packed_mantissa(bv),
        )
    }

    // Returns the sign field from a packed floating-point representation.
    // Does not check if `bv` has the correct number of bits.
    #[inline]
    fn packed_sign(bv: &BitVec) -> bool {
        bv[N - 1]
    }

    // Returns the (biased) exponent field from a packed floating-point
    // representation. Does not check if `bv` has the correct number of bits.
    #[inline]
    fn packed_exponent(bv: &BitVec) -> u64 {
        bv[(N - E - 1)..(N - 1)].load_le::<u64>()
    }

    // Returns the mantissa field from a packed floating-point representation.
    // Does not check if `bv` has the correct number of bits.
    #[inline]
    fn packed_mantissa(bv: &BitVec) -> BitVec {
        bv[..(N - E - 1)].into()
    }
}

// Implementing `From<BitVec>` for `Float`
impl<const E: usize, const N: usize> From<BitVec> for Float<E, N> {
    fn from(bv: BitVec) -> Self {
        assert_valid_format!(E, N);
        assert_eq!(
            bv.len(),
            N,
            "expected a BitVec of length {}, received {}",
            N,
            bv.len()
        );

        // split fields
        let (s, e, mut m) = Self::split_packed(&bv);
        let exp = e as i64 - Self::BIAS;

        // branch on exponent
        if exp > Self::EMAX {
            if m.not_any() {
                // infinity
                Self::infinity(s)
            } else {
                // NaN: the leading mantissa bit is the quiet bit
                let quiet = m[Self::M - 1];
                Self::nan(s, quiet, &m[..Self::NAN_PAYLOAD_SIZE])
            }
        } else if exp < Self::EMIN {
            if m.not_any() {
                // zero
                Self::zero(s)
            } else {
                // subnormal: no implicit bit, fixed exponent
                m.push(false);
                Self {
                    num: FloatNum::Number(s, Self::EXPMIN, m),
                }
            }
        } else {
            // normal
            m.push(true);
            Self {
                num: FloatNum::Number(s, exp - Self::M as i64, m),
            }
        }
    }
}

// Implementing `From<f64>` for `Float<11, 64>`
impl From<f64> for Double {
    fn from(f: f64) -> Self {
        let mut bv = bitvec![0; 64];
        bv.store_le::<u64>(f.to_bits());
        Self::from(bv)
    }
}

// Implementing `From<f32>` for `Float<8, 32>`
impl From<f32> for Single {
    fn from(f: f32) -> Self {
        let mut bv = bitvec![0; 32];
        bv.store_le::<u32>(f.to_bits());
        Self::from(bv)
    }
}
