//! Orderings that a set can be constructed with.

use std::cmp::Ordering;

/// A total order over `T`.
///
/// The order must be consistent with equality: two elements compare as `Ordering::Equal` if and
/// only if they are the same logical element. A set keeps the comparator it was constructed with
/// for its entire lifetime.
///
/// Any closure or function of type `Fn(&T, &T) -> Ordering` is a comparator.
///
/// # Examples
///
/// ```
/// use balanced_sets::compare::{Compare, Natural};
/// use std::cmp::Ordering;
///
/// assert_eq!(Natural.compare(&1, &2), Ordering::Less);
///
/// let reverse = |a: &u32, b: &u32| b.cmp(a);
/// assert_eq!(reverse.compare(&1, &2), Ordering::Greater);
/// ```
pub trait Compare<T: ?Sized> {
    /// Compares `a` against `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The natural order of a type, as given by its `Ord` implementation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Natural;

impl<T> Compare<T> for Natural
where
    T: Ord + ?Sized,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T, F> Compare<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
