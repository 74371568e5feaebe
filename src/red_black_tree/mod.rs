//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! approximately balanced during insertions and deletions. Red links only ever lean left.

mod node;
mod set;
mod tree;

pub use self::set::{RedBlackSet, RedBlackSetIter};
