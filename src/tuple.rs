/*
    Lexicographic comparators
*/

use std::cmp::Ordering;
use std::fmt;

use crate::Comparator;

/// A lexicographic comparator built from one comparator per position.
///
/// `Tuple<(C0, C1, ...)>` compares tuples `(T0, T1, ...)` where each
/// `Ci: Comparator<Ti>`, for up to twelve positions. `Tuple<[C; N]>`
/// compares arrays `[T; N]`.
///
/// Positions are compared in order and the first one that is not
/// `Equal` decides; comparators of later positions are not called.
/// With no positions every pair is `Equal`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tuple<C>(C);

/// Builds a lexicographic comparator from a tuple or array of comparators.
pub fn tuple<C>(comparators: C) -> Tuple<C> {
    Tuple(comparators)
}

impl<C> Tuple<C> {
    /// Returns the per-position comparators.
    pub fn comparators(&self) -> &C {
        &self.0
    }

    /// Unwraps the per-position comparators.
    pub fn into_inner(self) -> C {
        self.0
    }
}

macro_rules! tuple_impl {
    ($( ($idx:tt, $C:ident, $T:ident) ),*) => {
        impl<$($T, $C: Comparator<$T>),*> Comparator<($($T,)*)> for Tuple<($($C,)*)> {
            #[allow(unused_variables)]
            fn compare(&self, a: &($($T,)*), b: &($($T,)*)) -> Ordering {
                $(
                    match self.0.$idx.compare(&a.$idx, &b.$idx) {
                        Ordering::Equal => {}
                        ord => return ord,
                    }
                )*
                Ordering::Equal
            }
        }
    };
}

tuple_impl!();
tuple_impl!((0, C0, T0));
tuple_impl!((0, C0, T0), (1, C1, T1));
tuple_impl!((0, C0, T0), (1, C1, T1), (2, C2, T2));
tuple_impl!((0, C0, T0), (1, C1, T1), (2, C2, T2), (3, C3, T3));
tuple_impl!((0, C0, T0), (1, C1, T1), (2, C2, T2), (3, C3, T3), (4, C4, T4));
tuple_impl!(
    (0, C0, T0), (1, C1, T1), (2, C2, T2), (3, C3, T3), (4, C4, T4), (5, C5, T5)
);
tuple_impl!(
    (0, C0, T0), (1, C1, T1), (2, C2, T2), (3, C3, T3), (4, C4, T4), (5, C5, T5),
    (6, C6, T6)
);
tuple_impl!(
    (0, C0, T0), (1, C1, T1), (2, C2, T2), (3, C3, T3), (4, C4, T4), (5, C5, T5),
    (6, C6, T6), (7, C7, T7)
);
tuple_impl!(
    (0, C0, T0), (1, C1, T1), (2, C2, T2), (3, C3, T3), (4, C4, T4), (5, C5, T5),
    (6, C6, T6), (7, C7, T7), (8, C8, T8)
);
tuple_impl!(
    (0, C0, T0), (1, C1, T1), (2, C2, T2), (3, C3, T3), (4, C4, T4), (5, C5, T5),
    (6, C6, T6), (7, C7, T7), (8, C8, T8), (9, C9, T9)
);
tuple_impl!(
    (0, C0, T0), (1, C1, T1), (2, C2, T2), (3, C3, T3), (4, C4, T4), (5, C5, T5),
    (6, C6, T6), (7, C7, T7), (8, C8, T8), (9, C9, T9), (10, C10, T10)
);
tuple_impl!(
    (0, C0, T0), (1, C1, T1), (2, C2, T2), (3, C3, T3), (4, C4, T4), (5, C5, T5),
    (6, C6, T6), (7, C7, T7), (8, C8, T8), (9, C9, T9), (10, C10, T10), (11, C11, T11)
);

impl<T, C: Comparator<T>, const N: usize> Comparator<[T; N]> for Tuple<[C; N]> {
    fn compare(&self, a: &[T; N], b: &[T; N]) -> Ordering {
        lexicographic(self.0.iter(), a, b)
    }
}

// Scans positions in order, stopping at the first non-equal one.
fn lexicographic<'c, T, C>(comparators: impl Iterator<Item = &'c C>, a: &[T], b: &[T]) -> Ordering
where
    C: Comparator<T> + ?Sized + 'c,
{
    comparators
        .zip(a.iter().zip(b))
        .map(|(cmp, (x, y))| cmp.compare(x, y))
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

/// A lexicographic comparator over slices whose positions are
/// only known at runtime.
///
/// All positions share the element type `T`. The slices being compared
/// must have exactly one element per comparator.
pub struct Sequence<'a, T> {
    comparators: Vec<Box<dyn Comparator<T> + 'a>>,
}

impl<'a, T> Sequence<'a, T> {
    /// Creates a `Sequence` with no positions.
    pub fn new() -> Self {
        Self {
            comparators: Vec::new(),
        }
    }

    /// Appends a position compared by `cmp`.
    pub fn push(&mut self, cmp: impl Comparator<T> + 'a) {
        self.comparators.push(Box::new(cmp));
    }

    /// Appends a position compared by `cmp`, returning the `Sequence`.
    pub fn with(mut self, cmp: impl Comparator<T> + 'a) -> Self {
        self.push(cmp);
        self
    }

    /// Returns the number of positions.
    pub fn len(&self) -> usize {
        self.comparators.len()
    }

    /// Returns true if this `Sequence` has no positions.
    pub fn is_empty(&self) -> bool {
        self.comparators.is_empty()
    }
}

impl<'a, T> Comparator<[T]> for Sequence<'a, T> {
    /// Compares `a` with `b` position by position.
    ///
    /// Panics if either slice does not have one element per comparator.
    fn compare(&self, a: &[T], b: &[T]) -> Ordering {
        assert_eq!(
            a.len(),
            self.len(),
            "expected a sequence of length {}, received {}",
            self.len(),
            a.len()
        );
        assert_eq!(
            b.len(),
            self.len(),
            "expected a sequence of length {}, received {}",
            self.len(),
            b.len()
        );
        lexicographic(self.comparators.iter().map(|c| &**c), a, b)
    }
}

impl<'a, T> Default for Sequence<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T, C: Comparator<T> + 'a> FromIterator<C> for Sequence<'a, T> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        let mut seq = Self::new();
        iter.into_iter().for_each(|cmp| seq.push(cmp));
        seq
    }
}

impl<'a, T> fmt::Debug for Sequence<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence").field("len", &self.len()).finish()
    }
}
