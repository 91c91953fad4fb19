/*
    Comparators
*/

use std::cmp::Ordering;

/// A total order over values of type `T`.
///
/// Every `Fn(&T, &T) -> Ordering` is a `Comparator`, so plain functions
/// like [`strings`] or [`numeric`](crate::numeric) and closures can be
/// used wherever a comparator is expected.
pub trait Comparator<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Converts an `Ordering` to the result codes `-1`, `0` and `1`.
#[inline]
pub fn code(ord: Ordering) -> i8 {
    ord as i8
}

/// Compares two values by their exact value: equal, else less-than, else greater.
#[inline]
pub fn exact<T: Ord + ?Sized>(a: &T, b: &T) -> Ordering {
    if a == b {
        Ordering::Equal
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Compares text by code point. For UTF-8 this is also byte order.
pub fn strings<S: AsRef<str> + ?Sized>(a: &S, b: &S) -> Ordering {
    exact(a.as_ref(), b.as_ref())
}

/// Compares booleans with `false < true`.
pub fn booleans(a: &bool, b: &bool) -> Ordering {
    exact(a, b)
}

/// Compares two absent values, which are always equal.
pub fn nulls(_a: &(), _b: &()) -> Ordering {
    Ordering::Equal
}
