/*
    Defines a number
*/

use std::cmp::Ordering;

/// The number type.
///
/// Classification shared by every numeric representation in this library.
/// A `Number` encodes a number with some exceptions, say NaN from IEEE-754,
/// and is either a finite number, an infinity or a NaN.
pub trait Number: Clone {
    /// Returns true if this `Number` encodes a zero (of either sign).
    fn is_zero(&self) -> bool;

    /// Returns true if this `Number` encodes an infinity.
    fn is_infinity(&self) -> bool;

    /// Returns true if this `Number` does not encode a number.
    fn is_nan(&self) -> bool;

    /// Returns true if this `Number` encodes a finite number.
    fn is_finite(&self) -> bool {
        !self.is_infinity() && !self.is_nan()
    }

    /// Returns true if the sign bit of this `Number` is set.
    /// Negative zero and negative NaNs carry a sign too.
    fn sign(&self) -> bool;
}

/// Completes a partial comparison into a total order.
///
/// `partial` is the comparison of the mathematical values of `a` and `b`,
/// which is undefined exactly when one of them is NaN.
/// NaN is equal to NaN and less than every other value.
pub fn total_order<N: Number>(a: &N, b: &N, partial: Option<Ordering>) -> Ordering {
    match partial {
        Some(ord) => ord,
        None => match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => unreachable!("two ordered numbers must compare"),
        },
    }
}
