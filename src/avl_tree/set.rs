use crate::avl_tree::tree::{Tree, TreeIter};
use crate::compare::{Compare, Natural};
use crate::error::{Error, Result};
use crate::set::{OrderedSet, Set};
use std::fmt;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Nodes live in an arena and
/// keep a handle to their parent, so rebalancing walks upward from the point of change to the
/// root.
///
/// # Examples
///
/// ```
/// use balanced_sets::avl_tree::AvlSet;
///
/// let mut set = AvlSet::new();
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
pub struct AvlSet<T, C = Natural> {
    tree: Tree<T>,
    comparator: C,
}

impl<T> AvlSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlSet<T>` ordered by `T`'s natural order.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_sets::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C> AvlSet<T, C>
where
    C: Compare<T>,
{
    /// Constructs a new, empty `AvlSet<T, C>` ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_sets::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::with_comparator(|a: &u32, b: &u32| b.cmp(a));
    /// set.add(1);
    /// set.add(2);
    /// assert_eq!(set.first(), Ok(&2));
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        AvlSet {
            tree: Tree::new(),
            comparator,
        }
    }

    /// Returns the comparator the set was constructed with.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Adds a value to the set. If an equal value already exists, the set is left untouched and
    /// `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_sets::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert!(set.add(1));
    /// assert!(!set.add(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn add(&mut self, value: T) -> bool {
        self.tree.insert(value, &self.comparator)
    }

    /// Removes a value from the set. Returns `true` if an equal value existed and was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_sets::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
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
    /// use balanced_sets::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.add(1);
    /// assert_eq!(set.take(&1), Some(1));
    /// assert_eq!(set.take(&1), None);
    /// ```
    pub fn take(&mut self, value: &T) -> Option<T> {
        self.tree.remove(value, &self.comparator)
    }

    /// Checks if a value exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_sets::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.add(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        self.tree.find(value, &self.comparator).is_some()
    }

    /// Returns a reference to the stored value equal to `value`, or `None` if no such value
    /// exists.
    pub fn get(&self, value: &T) -> Option<&T> {
        self.tree
            .find(value, &self.comparator)
            .map(|handle| self.tree.get(handle))
    }
}

impl<T, C> AvlSet<T, C> {
    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.root.is_none()
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_sets::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.add(1);
    /// set.add(2);
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the minimum value of the set, or `Error::EmptyCollection` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_sets::avl_tree::AvlSet;
    /// use balanced_sets::Error;
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.first(), Err(Error::EmptyCollection));
    /// set.add(1);
    /// set.add(3);
    /// assert_eq!(set.first(), Ok(&1));
    /// ```
    pub fn first(&self) -> Result<&T> {
        self.tree.min().ok_or(Error::EmptyCollection)
    }

    /// Returns the maximum value of the set, or `Error::EmptyCollection` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_sets::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.add(1);
    /// set.add(3);
    /// assert_eq!(set.last(), Ok(&3));
    /// ```
    pub fn last(&self) -> Result<&T> {
        self.tree.max().ok_or(Error::EmptyCollection)
    }

    /// Returns the values of the set in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_sets::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.add(6);
    /// set.add(1);
    /// assert_eq!(set.inorder(), vec![&1, &6]);
    /// ```
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
    /// use balanced_sets::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.add(1);
    /// set.add(2);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlSetIter<'_, T> {
        AvlSetIter {
            tree_iter: TreeIter::new(&self.tree),
        }
    }
}

impl<T, C> Set<T> for AvlSet<T, C>
where
    C: Compare<T>,
{
    fn add(&mut self, value: T) -> bool {
        AvlSet::add(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        AvlSet::remove(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        AvlSet::contains(self, value)
    }

    fn len(&self) -> usize {
        AvlSet::len(self)
    }

    fn is_empty(&self) -> bool {
        AvlSet::is_empty(self)
    }
}

impl<T, C> OrderedSet<T> for AvlSet<T, C>
where
    C: Compare<T>,
{
    fn first(&self) -> Result<&T> {
        AvlSet::first(self)
    }

    fn last(&self) -> Result<&T> {
        AvlSet::last(self)
    }

    fn inorder(&self) -> Vec<&T> {
        AvlSet::inorder(self)
    }
}

impl<'a, T, C> IntoIterator for &'a AvlSet<T, C> {
    type IntoIter = AvlSetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `AvlSet<T, C>`.
///
/// This iterator traverses the elements of the set in ascending order and yields immutable
/// references.
pub struct AvlSetIter<'a, T> {
    tree_iter: TreeIter<'a, T>,
}

impl<'a, T> Iterator for AvlSetIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.tree_iter.next()
    }
}

impl<T> Default for AvlSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> fmt::Debug for AvlSet<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::AvlSet;
    use crate::error::Error;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_len_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert!(set.is_empty());
    }

    #[test]
    fn test_first_last_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert_eq!(set.first(), Err(Error::EmptyCollection));
        assert_eq!(set.last(), Err(Error::EmptyCollection));
    }

    #[test]
    fn test_add() {
        let mut set = AvlSet::new();
        assert!(set.add(1));
        assert!(set.contains(&1));
        set.tree.check();
    }

    #[test]
    fn test_add_duplicate() {
        let mut set = AvlSet::new();
        assert!(set.add(1));
        assert!(!set.add(1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_add_duplicate_keeps_stored_value() {
        let mut set = AvlSet::with_comparator(|a: &(u32, char), b: &(u32, char)| a.0.cmp(&b.0));
        assert!(set.add((1, 'a')));
        assert!(!set.add((1, 'b')));
        assert_eq!(set.get(&(1, 'z')), Some(&(1, 'a')));
    }

    #[test]
    fn test_remove() {
        let mut set = AvlSet::new();
        set.add(1);
        assert!(set.remove(&1));
        assert!(!set.contains(&1));
        assert!(set.is_empty());
    }

    #[test]
    fn test_remove_missing() {
        let mut set = AvlSet::new();
        set.add(1);
        assert!(!set.remove(&2));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_first_last() {
        let mut set = AvlSet::new();
        set.add(1);
        set.add(3);
        set.add(5);

        assert_eq!(set.first(), Ok(&1));
        assert_eq!(set.last(), Ok(&5));
    }

    #[test]
    fn test_iter() {
        let mut set = AvlSet::new();
        set.add(1);
        set.add(5);
        set.add(3);

        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &3, &5]);
        assert_eq!((&set).into_iter().count(), 3);
    }

    #[test]
    fn test_debug() {
        let mut set = AvlSet::new();
        set.add(2);
        set.add(1);
        assert_eq!(format!("{:?}", set), "{1, 2}");
    }

    #[test]
    fn test_scenarios() {
        let mut set = AvlSet::new();
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
        assert!(set.contains(&12));
        set.tree.check();
    }

    #[test]
    fn test_comparator() {
        let mut set = AvlSet::with_comparator(|a: &i32, b: &i32| b.cmp(a));
        for value in 0..10 {
            set.add(value);
        }
        assert_eq!(set.first(), Ok(&9));
        assert_eq!(set.last(), Ok(&0));
        assert_eq!(set.iter().cloned().collect::<Vec<i32>>(), (0..10).rev().collect::<Vec<i32>>());
        set.tree.check();
    }

    #[test]
    fn test_clear() {
        let mut set = AvlSet::new();
        set.add(1);
        set.add(2);
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.first(), Err(Error::EmptyCollection));
        assert!(set.add(1));
    }

    proptest! {
        #[test]
        fn prop_invariants_hold(ops in prop::collection::vec((any::<bool>(), 0u8..64), 0..300)) {
            let mut set = AvlSet::new();
            let mut expected = BTreeSet::new();
            for (is_add, value) in ops {
                if is_add {
                    prop_assert_eq!(set.add(value), expected.insert(value));
                } else {
                    prop_assert_eq!(set.remove(&value), expected.remove(&value));
                }
                set.tree.check();
                prop_assert_eq!(set.len(), expected.len());
            }
            prop_assert_eq!(set.inorder(), expected.iter().collect::<Vec<&u8>>());
        }

        #[test]
        fn prop_add_then_remove_restores(values in prop::collection::btree_set(any::<i32>(), 0..100), probe in any::<i32>()) {
            let mut set = AvlSet::new();
            for value in &values {
                set.add(*value);
            }
            prop_assume!(!values.contains(&probe));

            let before = set.inorder().into_iter().cloned().collect::<Vec<i32>>();
            prop_assert!(set.add(probe));
            prop_assert!(set.remove(&probe));
            prop_assert_eq!(set.len(), values.len());
            prop_assert_eq!(set.inorder().into_iter().cloned().collect::<Vec<i32>>(), before);
            set.tree.check();
        }
    }
}
