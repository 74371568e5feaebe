use crate::arena::{Arena, Handle};
use crate::avl_tree::node::Node;
use crate::compare::Compare;
use std::cmp::{self, Ordering};
use std::mem;

pub struct Tree<T> {
    pub arena: Arena<Node<T>>,
    pub root: Option<Handle>,
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Tree {
            arena: Arena::new(),
            root: None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    // the height of an empty subtree is -1 and the height of a leaf is 0
    pub fn height(&self, link: Option<Handle>) -> i32 {
        link.map_or(-1, |handle| self.arena[handle].height)
    }

    pub fn balance(&self, handle: Handle) -> i32 {
        let node = &self.arena[handle];
        self.height(node.right) - self.height(node.left)
    }

    fn update(&mut self, handle: Handle) {
        let height = {
            let node = &self.arena[handle];
            cmp::max(self.height(node.left), self.height(node.right)) + 1
        };
        self.arena[handle].height = height;
    }

    // points whatever held `old` (its parent, or the root) at `new`
    fn replace_child(&mut self, parent: Option<Handle>, old: Handle, new: Option<Handle>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let node = &mut self.arena[parent];
                if node.left == Some(old) {
                    node.left = new;
                } else {
                    node.right = new;
                }
            },
        }
    }

    fn rotate_left(&mut self, handle: Handle) -> Handle {
        let child = match self.arena[handle].right {
            Some(child) => child,
            None => unreachable!(),
        };
        let parent = self.arena[handle].parent;
        let inner = self.arena[child].left;

        self.arena[handle].right = inner;
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(handle);
        }

        self.arena[child].left = Some(handle);
        self.arena[handle].parent = Some(child);
        self.arena[child].parent = parent;
        self.replace_child(parent, handle, Some(child));

        self.update(handle);
        self.update(child);
        child
    }

    fn rotate_right(&mut self, handle: Handle) -> Handle {
        let child = match self.arena[handle].left {
            Some(child) => child,
            None => unreachable!(),
        };
        let parent = self.arena[handle].parent;
        let inner = self.arena[child].right;

        self.arena[handle].left = inner;
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(handle);
        }

        self.arena[child].right = Some(handle);
        self.arena[handle].parent = Some(child);
        self.arena[child].parent = parent;
        self.replace_child(parent, handle, Some(child));

        self.update(handle);
        self.update(child);
        child
    }

    // Restores the balance factor of `handle` and of every ancestor above it. A rotation can change
    // the height of everything above it, so the walk always reaches the root.
    fn rebalance(&mut self, mut curr: Option<Handle>) {
        while let Some(handle) = curr {
            self.update(handle);

            let top = match self.balance(handle) {
                -2 => {
                    let child = match self.arena[handle].left {
                        Some(child) => child,
                        None => unreachable!(),
                    };
                    let (outer, inner) = (self.arena[child].left, self.arena[child].right);
                    if self.height(outer) < self.height(inner) {
                        self.rotate_left(child);
                    }
                    self.rotate_right(handle)
                },
                2 => {
                    let child = match self.arena[handle].right {
                        Some(child) => child,
                        None => unreachable!(),
                    };
                    let (outer, inner) = (self.arena[child].right, self.arena[child].left);
                    if self.height(outer) < self.height(inner) {
                        self.rotate_right(child);
                    }
                    self.rotate_left(handle)
                },
                _ => handle,
            };

            curr = self.arena[top].parent;
        }
    }

    pub fn find<C>(&self, value: &T, comparator: &C) -> Option<Handle>
    where
        C: Compare<T>,
    {
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            curr = match comparator.compare(value, &node.value) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    // Returns `false` without touching the tree if an equal value is present.
    pub fn insert<C>(&mut self, value: T, comparator: &C) -> bool
    where
        C: Compare<T>,
    {
        let mut parent = None;
        let mut ordering = Ordering::Equal;
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            ordering = comparator.compare(&value, &node.value);
            curr = match ordering {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return false,
            };
            parent = Some(handle);
        }

        let handle = self.arena.allocate(Node::new(value, parent));
        match parent {
            None => self.root = Some(handle),
            Some(parent) => {
                if ordering == Ordering::Less {
                    self.arena[parent].left = Some(handle);
                } else {
                    self.arena[parent].right = Some(handle);
                }
            },
        }

        self.rebalance(parent);
        true
    }

    pub fn remove<C>(&mut self, value: &T, comparator: &C) -> Option<T>
    where
        C: Compare<T>,
    {
        let target = self.find(value, comparator)?;
        let donor = match (self.arena[target].left, self.arena[target].right) {
            (Some(_), Some(right)) => self.min_handle(right),
            _ => target,
        };

        let donor_value = self.splice(donor);
        if donor == target {
            Some(donor_value)
        } else {
            Some(mem::replace(&mut self.arena[target].value, donor_value))
        }
    }

    // precondition: `handle` has at most one child
    fn splice(&mut self, handle: Handle) -> T {
        let (parent, child) = {
            let node = &self.arena[handle];
            (node.parent, node.left.or(node.right))
        };
        if let Some(child) = child {
            self.arena[child].parent = parent;
        }
        self.replace_child(parent, handle, child);

        let node = self.arena.free(handle);
        self.rebalance(parent);
        node.value
    }

    fn min_handle(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.arena[handle].left {
            handle = left;
        }
        handle
    }

    fn max_handle(&self, mut handle: Handle) -> Handle {
        while let Some(right) = self.arena[handle].right {
            handle = right;
        }
        handle
    }

    pub fn min(&self) -> Option<&T> {
        self.root
            .map(|root| &self.arena[self.min_handle(root)].value)
    }

    pub fn max(&self) -> Option<&T> {
        self.root
            .map(|root| &self.arena[self.max_handle(root)].value)
    }

    pub fn get(&self, handle: Handle) -> &T {
        &self.arena[handle].value
    }

    // Checks every structural invariant and returns the height of the tree.
    #[cfg(test)]
    pub fn check(&self) -> i32 {
        fn check_subtree<T>(tree: &Tree<T>, link: Option<Handle>, parent: Option<Handle>) -> i32 {
            let handle = match link {
                Some(handle) => handle,
                None => return -1,
            };
            let node = &tree.arena[handle];
            assert_eq!(node.parent, parent);

            let left_height = check_subtree(tree, node.left, link);
            let right_height = check_subtree(tree, node.right, link);
            assert!((right_height - left_height).abs() <= 1);
            assert_eq!(node.height, cmp::max(left_height, right_height) + 1);
            node.height
        }

        check_subtree(self, self.root, None)
    }
}

/// An iterator over the values of a tree in ascending order.
pub struct TreeIter<'a, T> {
    tree: &'a Tree<T>,
    current: Option<Handle>,
    stack: Vec<Handle>,
}

impl<'a, T> TreeIter<'a, T> {
    pub fn new(tree: &'a Tree<T>) -> Self {
        TreeIter {
            tree,
            current: tree.root,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> Iterator for TreeIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        while let Some(handle) = self.current {
            self.stack.push(handle);
            self.current = tree.arena[handle].left;
        }
        let handle = self.stack.pop()?;
        let node = &tree.arena[handle];
        self.current = node.right;
        Some(&node.value)
    }
}
