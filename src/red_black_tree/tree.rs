use crate::compare::Compare;
use crate::red_black_tree::node::{Color, Node};
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn is_red<T>(tree: &Tree<T>) -> bool {
    match tree {
        None => false,
        Some(ref node) => node.color == Color::Red,
    }
}

fn is_left_red<T>(tree: &Tree<T>) -> bool {
    match tree {
        None => false,
        Some(ref node) => is_red(&node.left),
    }
}

pub fn size<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.size,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    child.color = node.color;
    node.color = Color::Red;
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    child.color = node.color;
    node.color = Color::Red;
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// Restores the left-leaning invariants in the three-node neighbourhood of `node`.
fn balance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    if is_red(&node.right) && !is_red(&node.left) {
        node = rotate_left(node);
    }
    if is_red(&node.left) && is_left_red(&node.left) {
        node = rotate_right(node);
    }
    if is_red(&node.left) && is_red(&node.right) {
        node.flip_colors();
    }
    node.update();
    node
}

// Makes the left child or one of its children red.
fn move_red_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.flip_colors();
    if is_left_red(&node.right) {
        node.right = node.right.take().map(rotate_right);
        node = rotate_left(node);
        node.flip_colors();
    }
    node
}

// Makes the right child or one of its children red.
fn move_red_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.flip_colors();
    if is_left_red(&node.left) {
        node = rotate_right(node);
        node.flip_colors();
    }
    node
}

fn insert_subtree<T, C>(tree: Tree<T>, value: T, comparator: &C) -> (Box<Node<T>>, Option<T>)
where
    C: Compare<T>,
{
    let mut node = match tree {
        Some(node) => node,
        None => return (Box::new(Node::new(value)), None),
    };

    let ret = match comparator.compare(&value, &node.value) {
        Ordering::Less => {
            let (left, ret) = insert_subtree(node.left.take(), value, comparator);
            node.left = Some(left);
            ret
        },
        Ordering::Greater => {
            let (right, ret) = insert_subtree(node.right.take(), value, comparator);
            node.right = Some(right);
            ret
        },
        Ordering::Equal => Some(mem::replace(&mut node.value, value)),
    };

    (balance(node), ret)
}

/// Inserts `value`, overwriting and returning the stored value if an equal one exists.
pub fn insert<T, C>(tree: &mut Tree<T>, value: T, comparator: &C) -> Option<T>
where
    C: Compare<T>,
{
    let (mut root, ret) = insert_subtree(tree.take(), value, comparator);
    root.color = Color::Black;
    *tree = Some(root);
    ret
}

// Removes the minimum of a non-empty subtree whose root or left child is red.
fn remove_min<T>(mut node: Box<Node<T>>) -> (Tree<T>, T) {
    if node.left.is_none() {
        let Node { value, right, .. } = *node;
        return (right, value);
    }

    if !is_red(&node.left) && !is_left_red(&node.left) {
        node = move_red_left(node);
    }

    let (left, min) = match node.left.take() {
        Some(left) => remove_min(left),
        None => unreachable!(),
    };
    node.left = left;
    (Some(balance(node)), min)
}

// precondition: a value equal to `value` exists in the subtree rooted at `node`
fn remove_subtree<T, C>(mut node: Box<Node<T>>, value: &T, comparator: &C) -> (Tree<T>, T)
where
    C: Compare<T>,
{
    if comparator.compare(value, &node.value) == Ordering::Less {
        if !is_red(&node.left) && !is_left_red(&node.left) {
            node = move_red_left(node);
        }
        let (left, ret) = match node.left.take() {
            Some(left) => remove_subtree(left, value, comparator),
            None => unreachable!(),
        };
        node.left = left;
        return (Some(balance(node)), ret);
    }

    if is_red(&node.left) {
        node = rotate_right(node);
    }

    if comparator.compare(value, &node.value) == Ordering::Equal && node.right.is_none() {
        let Node { value: stored, left, .. } = *node;
        debug_assert!(left.is_none());
        return (None, stored);
    }

    if !is_red(&node.right) && !is_left_red(&node.right) {
        node = move_red_right(node);
    }

    let right = match node.right.take() {
        Some(right) => right,
        None => unreachable!(),
    };
    let ret = if comparator.compare(value, &node.value) == Ordering::Equal {
        let (right, min) = remove_min(right);
        node.right = right;
        mem::replace(&mut node.value, min)
    } else {
        let (right, ret) = remove_subtree(right, value, comparator);
        node.right = right;
        ret
    };
    (Some(balance(node)), ret)
}

/// Removes and returns the stored value equal to `value`, if any.
pub fn remove<T, C>(tree: &mut Tree<T>, value: &T, comparator: &C) -> Option<T>
where
    C: Compare<T>,
{
    get(tree, value, comparator)?;

    let mut root = tree.take()?;
    if !is_red(&root.left) && !is_red(&root.right) {
        root.color = Color::Red;
    }

    let (root, ret) = remove_subtree(root, value, comparator);
    *tree = root;
    if let Some(ref mut root) = tree {
        root.color = Color::Black;
    }
    Some(ret)
}

pub fn get<'a, T, C>(tree: &'a Tree<T>, value: &T, comparator: &C) -> Option<&'a T>
where
    C: Compare<T>,
{
    let mut curr = tree;
    while let Some(node) = curr {
        curr = match comparator.compare(value, &node.value) {
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
            Ordering::Equal => return Some(&node.value),
        };
    }
    None
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.value
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.value
    })
}

// Checks every structural invariant and returns the number of black links from the root to any
// empty slot.
#[cfg(test)]
pub fn check<T>(tree: &Tree<T>) -> usize {
    fn check_subtree<T>(tree: &Tree<T>, parent_is_red: bool) -> usize {
        let node = match tree {
            Some(ref node) => node,
            None => return 0,
        };
        assert!(!is_red(&node.right));
        assert!(!(parent_is_red && node.color == Color::Red));
        assert_eq!(node.size, size(&node.left) + size(&node.right) + 1);

        let is_node_red = node.color == Color::Red;
        let left_black_height = check_subtree(&node.left, is_node_red);
        let right_black_height = check_subtree(&node.right, is_node_red);
        assert_eq!(left_black_height, right_black_height);

        if is_node_red {
            left_black_height
        } else {
            left_black_height + 1
        }
    }

    assert!(!is_red(tree));
    check_subtree(tree, false)
}

/// An iterator over the values of a tree in ascending order.
pub struct TreeIter<'a, T> {
    current: &'a Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> TreeIter<'a, T> {
    pub fn new(tree: &'a Tree<T>) -> Self {
        TreeIter {
            current: tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> Iterator for TreeIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut current: &'a Tree<T> = self.current;
        while let Some(node) = current {
            self.stack.push(node);
            current = &node.left;
        }
        let node = self.stack.pop()?;
        self.current = &node.right;
        Some(&node.value)
    }
}

#[cfg(test)]
mod tests {
    use super::{check, insert, is_red, max, min, remove, Tree};
    use crate::compare::Natural;

    #[test]
    fn test_insert_ascending_leans_left() {
        let mut tree: Tree<u32> = None;
        for i in 0..3 {
            insert(&mut tree, i, &Natural);
        }
        let root = tree.as_ref().unwrap();
        assert_eq!(root.value, 1);
        assert!(!is_red(&root.left));
        assert!(!is_red(&root.right));
        assert_eq!(check(&tree), 2);
    }

    #[test]
    fn test_insert_overwrites() {
        let mut tree: Tree<u32> = None;
        assert_eq!(insert(&mut tree, 1, &Natural), None);
        assert_eq!(insert(&mut tree, 1, &Natural), Some(1));
        assert_eq!(super::size(&tree), 1);
    }

    #[test]
    fn test_remove_min_and_max() {
        let mut tree: Tree<u32> = None;
        for i in 0..100 {
            insert(&mut tree, i, &Natural);
        }
        for i in 0..50 {
            assert_eq!(remove(&mut tree, &i, &Natural), Some(i));
            assert_eq!(remove(&mut tree, &(99 - i), &Natural), Some(99 - i));
            check(&tree);
        }
        assert!(tree.is_none());
        assert_eq!(min(&tree), None);
        assert_eq!(max(&tree), None);
    }

    #[test]
    fn test_remove_missing() {
        let mut tree: Tree<u32> = None;
        insert(&mut tree, 1, &Natural);
        assert_eq!(remove(&mut tree, &2, &Natural), None);
        assert_eq!(super::size(&tree), 1);
        check(&tree);
    }

    #[test]
    fn test_size_counts_subtrees() {
        let mut tree: Tree<u32> = None;
        for i in &[5, 2, 8, 1, 9, 3] {
            insert(&mut tree, *i, &Natural);
        }
        assert_eq!(super::size(&tree), 6);
        remove(&mut tree, &5, &Natural);
        assert_eq!(super::size(&tree), 5);
        check(&tree);
    }
}
