use crate::arena::Handle;

/// A struct representing an internal node of an avl tree.
///
/// `parent` only records where the node hangs so that rebalancing can walk upwards; the arena owns
/// every node.
pub struct Node<T> {
    pub value: T,
    pub height: i32,
    pub parent: Option<Handle>,
    pub left: Option<Handle>,
    pub right: Option<Handle>,
}

impl<T> Node<T> {
    pub fn new(value: T, parent: Option<Handle>) -> Self {
        Node {
            value,
            height: 0,
            parent,
            left: None,
            right: None,
        }
    }
}
