use crate::compare::{Compare, Natural};
use crate::error::{Error, Result};
use crate::red_black_tree::tree::{self, TreeIter};
use crate::set::{OrderedSet, Set};
use std::fmt;

/// An ordered set implemented using a left-leaning red black tree.
///
/// A red black tree is a self-balancing binary search tree where every node is colored red or
/// black, every path from the root to an empty slot crosses the same number of black links, and
/// no two red links are consecutive. In the left-leaning variant a red link can only be a left
/// child link. Every node also counts the size of its subtree, so the length of the set is read
/// off the root.
///
/// Adding a value equal to one already in the set overwrites the stored value in place.
///
/// # Examples
///
/// ```
/// use balanced_sets::red_black_tree::RedBlackSet;
///
/// let mut set = RedBlackSet::new();
/// set.add(0);
/// set.add(3);
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.first(), Ok(&0));
/// assert_eq!(set.last(), Ok(&3));
///
/// assert!(set.remove(&0));
/// assert!(!set.remove(&1));
/// ```
pub struct RedBlackSet<T, C = Natural> {
    tree: tree::Tree<T>,
    comparator: C,
}

impl<T> RedBlackSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `RedBlackSet<T>` ordered by `T`'s natural order.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_sets::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C> RedBlackSet<T, C>
where
    C: Compare<T>,
{
    /// Constructs a new, empty `RedBlackSet<T, C>` ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_sets::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::with_comparator(|a: &u32, b: &u32| b.cmp(a));
    /// set.add(1);
    /// set.add(2);
    /// assert_eq!(set.first(), Ok(&2));
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        RedBlackSet {
            tree: None,
            comparator,
        }
    }

    /// Returns the comparator the set was constructed with.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Adds a value to the set. Returns `true` if the value was not already present. Otherwise
    /// the stored value is overwritten by `value`, the length is unchanged, and `false` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_sets::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert!(set.add(1));
    /// assert!(!set.add(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn add(&mut self, value: T) -> bool {
        self.replace(value).is_none()
    }

    /// Adds a value to the set, overwriting and returning the stored value equal to it if one
    /// exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_sets::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert_eq!(set.replace(1), None);
    /// assert_eq!(set.replace(1), Some(1));
    /// ```
    pub fn replace(&mut self, value: T) -> Option<T> {
        tree::insert(&mut self.tree, value, &self.comparator)
    }

    /// Removes a value from the set. Returns `true` if an equal value existed and was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_sets::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.add(1);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes a value from the set and returns the stored value equal to it, or `None` if no
    /// such value exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_sets::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.add(1);
    /// assert_eq!(set.take(&1), Some(1));
    /// assert_eq!(set.take(&1), None);
    /// ```
    pub fn take(&mut self, value: &T) -> Option<T> {
        tree::remove(&mut self.tree, value, &self.comparator)
    }

    /// Checks if a value exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_sets::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.add(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Returns a reference to the stored value equal to `value`, or `None` if no such value
    /// exists.
    pub fn get(&self, value: &T) -> Option<&T> {
        tree::get(&self.tree, value, &self.comparator)
    }
}

impl<T, C> RedBlackSet<T, C> {
    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        tree::size(&self.tree)
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.is_none()
    }

    /// Clears the set, removing all values.
    pub fn clear(&mut self) {
        self.tree = None;
    }

    /// Returns the minimum value of the set, or `Error::EmptyCollection` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_sets::red_black_tree::RedBlackSet;
    /// use balanced_sets::Error;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert_eq!(set.first(), Err(Error::EmptyCollection));
    /// set.add(1);
    /// set.add(3);
    /// assert_eq!(set.first(), Ok(&1));
    /// ```
    pub fn first(&self) -> Result<&T> {
        tree::min(&self.tree).ok_or(Error::EmptyCollection)
    }

    /// Returns the maximum value of the set, or `Error::EmptyCollection` if the set is empty.
    pub fn last(&self) -> Result<&T> {
        tree::max(&self.tree).ok_or(Error::EmptyCollection)
    }

    /// Returns the values of the set in ascending order.
    pub fn inorder(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        values.extend(self.iter());
        values
    }

    /// Returns an iterator over the set. The iterator will yield values using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_sets::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.add(1);
    /// set.add(2);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackSetIter<'_, T> {
        RedBlackSetIter {
            tree_iter: TreeIter::new(&self.tree),
        }
    }
}

impl<T, C> Set<T> for RedBlackSet<T, C>
where
    C: Compare<T>,
{
    fn add(&mut self, value: T) -> bool {
        RedBlackSet::add(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        RedBlackSet::remove(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        RedBlackSet::contains(self, value)
    }

    fn len(&self) -> usize {
        RedBlackSet::len(self)
    }

    fn is_empty(&self) -> bool {
        RedBlackSet::is_empty(self)
    }
}

impl<T, C> OrderedSet<T> for RedBlackSet<T, C>
where
    C: Compare<T>,
{
    fn first(&self) -> Result<&T> {
        RedBlackSet::first(self)
    }

    fn last(&self) -> Result<&T> {
        RedBlackSet::last(self)
    }

    fn inorder(&self) -> Vec<&T> {
        RedBlackSet::inorder(self)
    }
}

impl<'a, T, C> IntoIterator for &'a RedBlackSet<T, C> {
    type IntoIter = RedBlackSetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `RedBlackSet<T, C>`.
///
/// This iterator traverses the elements of the set in ascending order and yields immutable
/// references.
pub struct RedBlackSetIter<'a, T> {
    tree_iter: TreeIter<'a, T>,
}

impl<'a, T> Iterator for RedBlackSetIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.tree_iter.next()
    }
}

impl<T> Default for RedBlackSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> fmt::Debug for RedBlackSet<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::RedBlackSet;
    use crate::error::Error;
    use crate::red_black_tree::tree;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_len_empty() {
        let set: RedBlackSet<u32> = RedBlackSet::new();
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let set: RedBlackSet<u32> = RedBlackSet::new();
        assert!(set.is_empty());
    }

    #[test]
    fn test_first_last_empty() {
        let set: RedBlackSet<u32> = RedBlackSet::new();
        assert_eq!(set.first(), Err(Error::EmptyCollection));
        assert_eq!(set.last(), Err(Error::EmptyCollection));
    }

    #[test]
    fn test_add() {
        let mut set = RedBlackSet::new();
        assert!(set.add(1));
        assert!(set.contains(&1));
        tree::check(&set.tree);
    }

    #[test]
    fn test_add_replace() {
        let mut set = RedBlackSet::new();
        assert_eq!(set.replace(1), None);
        assert_eq!(set.replace(1), Some(1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_add_duplicate_overwrites_stored_value() {
        let mut set =
            RedBlackSet::with_comparator(|a: &(u32, char), b: &(u32, char)| a.0.cmp(&b.0));
        assert!(set.add((1, 'a')));
        assert!(!set.add((1, 'b')));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(&(1, 'z')), Some(&(1, 'b')));
    }

    #[test]
    fn test_remove() {
        let mut set = RedBlackSet::new();
        set.add(1);
        assert!(set.remove(&1));
        assert!(!set.contains(&1));
        assert!(set.is_empty());
    }

    #[test]
    fn test_remove_missing() {
        let mut set = RedBlackSet::new();
        set.add(1);
        assert!(!set.remove(&2));
        assert_eq!(set.len(), 1);
        tree::check(&set.tree);
    }

    #[test]
    fn test_first_last() {
        let mut set = RedBlackSet::new();
        set.add(1);
        set.add(3);
        set.add(5);

        assert_eq!(set.first(), Ok(&1));
        assert_eq!(set.last(), Ok(&5));
    }

    #[test]
    fn test_iter() {
        let mut set = RedBlackSet::new();
        set.add(1);
        set.add(5);
        set.add(3);

        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &3, &5]);
        assert_eq!((&set).into_iter().count(), 3);
    }

    #[test]
    fn test_debug() {
        let mut set = RedBlackSet::new();
        set.add(2);
        set.add(1);
        assert_eq!(format!("{:?}", set), "{1, 2}");
    }

    #[test]
    fn test_scenarios() {
        let mut set = RedBlackSet::new();
        for value in &[1, 6, 4, 12] {
            set.add(*value);
        }
        assert_eq!(set.inorder(), vec![&1, &4, &6, &12]);

        assert!(set.remove(&6));
        assert!(set.remove(&1));
        assert_eq!(set.inorder(), vec![&4, &12]);
        assert_eq!(set.len(), 2);

        assert!(!set.add(12));
        assert_eq!(set.len(), 2);
        tree::check(&set.tree);
    }

    #[test]
    fn test_remove_after_mixed_adds() {
        let mut set = RedBlackSet::new();
        for value in &[3, 9, 4, 13] {
            set.add(*value);
        }
        assert!(set.contains(&4));
        assert!(!set.contains(&1));

        assert!(set.remove(&9));
        assert!(set.remove(&3));
        assert_eq!(set.inorder(), vec![&4, &13]);
        tree::check(&set.tree);
    }

    #[test]
    fn test_comparator() {
        let mut set = RedBlackSet::with_comparator(|a: &i32, b: &i32| b.cmp(a));
        for value in 0..10 {
            set.add(value);
        }
        assert_eq!(set.first(), Ok(&9));
        assert_eq!(set.last(), Ok(&0));
        assert_eq!(set.iter().cloned().collect::<Vec<i32>>(), (0..10).rev().collect::<Vec<i32>>());
        tree::check(&set.tree);
    }

    #[test]
    fn test_clear() {
        let mut set = RedBlackSet::new();
        set.add(1);
        set.add(2);
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.add(1));
    }

    proptest! {
        #[test]
        fn prop_invariants_hold(ops in prop::collection::vec((any::<bool>(), 0u8..64), 0..300)) {
            let mut set = RedBlackSet::new();
            let mut expected = BTreeSet::new();
            for (is_add, value) in ops {
                if is_add {
                    prop_assert_eq!(set.add(value), expected.insert(value));
                } else {
                    prop_assert_eq!(set.remove(&value), expected.remove(&value));
                }
                tree::check(&set.tree);
                prop_assert_eq!(set.len(), expected.len());
            }
            prop_assert_eq!(set.inorder(), expected.iter().collect::<Vec<&u8>>());
        }

        #[test]
        fn prop_add_then_remove_restores(values in prop::collection::btree_set(any::<i32>(), 0..100), probe in any::<i32>()) {
            let mut set = RedBlackSet::new();
            for value in &values {
                set.add(*value);
            }
            prop_assume!(!values.contains(&probe));

            let before = set.inorder().into_iter().cloned().collect::<Vec<i32>>();
            prop_assert!(set.add(probe));
            prop_assert!(set.remove(&probe));
            prop_assert_eq!(set.len(), values.len());
            prop_assert_eq!(set.inorder().into_iter().cloned().collect::<Vec<i32>>(), before);
            tree::check(&set.tree);
        }
    }
}
