//! Contracts shared by every set in this crate.

use crate::error::{Error, Result};
use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

/// A collection of unique elements.
///
/// Only membership is promised; iteration order is unspecified. Sets in this crate implement it,
/// and so does `std::collections::HashSet`, so client code written against `Set<T>` can swap
/// between them.
///
/// # Examples
///
/// ```
/// use balanced_sets::avl_tree::AvlSet;
/// use balanced_sets::Set;
/// use std::collections::HashSet;
///
/// fn fill<S: Set<u32>>(set: &mut S) {
///     for i in &[3, 1, 3] {
///         set.add(*i);
///     }
/// }
///
/// let mut tree = AvlSet::new();
/// let mut hashed = HashSet::new();
/// fill(&mut tree);
/// fill(&mut hashed);
/// assert_eq!(Set::len(&tree), Set::len(&hashed));
/// ```
pub trait Set<T> {
    /// Adds an element. Returns `false` if an equal element was already present.
    fn add(&mut self, value: T) -> bool;

    /// Removes the element equal to `value`. Returns `false` if no such element was present.
    fn remove(&mut self, value: &T) -> bool;

    /// Returns `true` if an element equal to `value` is present.
    fn contains(&self, value: &T) -> bool;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Like `add`, but fails with `Error::InvalidArgument` when `value` is `None`. The set is not
    /// touched on failure.
    fn try_add(&mut self, value: Option<T>) -> Result<bool> {
        value
            .map(|value| self.add(value))
            .ok_or(Error::InvalidArgument)
    }

    /// Like `remove`, but fails with `Error::InvalidArgument` when `value` is `None`.
    fn try_remove(&mut self, value: Option<&T>) -> Result<bool> {
        value
            .map(|value| self.remove(value))
            .ok_or(Error::InvalidArgument)
    }

    /// Like `contains`, but fails with `Error::InvalidArgument` when `value` is `None`.
    fn try_contains(&self, value: Option<&T>) -> Result<bool> {
        value
            .map(|value| self.contains(value))
            .ok_or(Error::InvalidArgument)
    }
}

/// A set whose elements are kept in ascending order.
///
/// Which balancing strategy backs an `OrderedSet` is fixed when it is constructed.
///
/// # Examples
///
/// ```
/// use balanced_sets::avl_tree::AvlSet;
/// use balanced_sets::red_black_tree::RedBlackSet;
/// use balanced_sets::{Error, OrderedSet, Set};
///
/// let mut sets: Vec<Box<dyn OrderedSet<u32>>> = Vec::new();
/// sets.push(Box::new(AvlSet::<u32>::new()));
/// sets.push(Box::new(RedBlackSet::<u32>::new()));
///
/// for set in &mut sets {
///     assert_eq!(set.first(), Err(Error::EmptyCollection));
///     set.add(6);
///     set.add(1);
///     assert_eq!(set.inorder(), vec![&1, &6]);
/// }
/// ```
pub trait OrderedSet<T>: Set<T> {
    /// Returns the least element, or `Error::EmptyCollection` if there is none.
    fn first(&self) -> Result<&T>;

    /// Returns the greatest element, or `Error::EmptyCollection` if there is none.
    fn last(&self) -> Result<&T>;

    /// Returns every element in ascending order as of the time of the call.
    fn inorder(&self) -> Vec<&T>;
}

impl<T, S> Set<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn add(&mut self, value: T) -> bool {
        self.insert(value)
    }

    fn remove(&mut self, value: &T) -> bool {
        HashSet::remove(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        HashSet::contains(self, value)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn is_empty(&self) -> bool {
        HashSet::is_empty(self)
    }
}
