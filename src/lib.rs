//! Ordered sets backed by self-balancing binary search trees.
//!
//! Two interchangeable strategies implement the same `OrderedSet` contract:
//!
//! - `avl_tree::AvlSet` keeps the heights of sibling subtrees within one of each other and
//!   rebalances bottom-up with single and double rotations.
//! - `red_black_tree::RedBlackSet` is a left-leaning red black tree that rebalances top-down
//!   with rotations and color flips during its recursive insert and remove.
//!
//! Both can be constructed with a custom `compare::Compare` ordering in place of `Ord`.
//!
//! # Examples
//!
//! ```
//! use balanced_sets::avl_tree::AvlSet;
//! use balanced_sets::red_black_tree::RedBlackSet;
//! use balanced_sets::{OrderedSet, Set};
//!
//! fn fill(set: &mut dyn OrderedSet<u32>) -> Vec<u32> {
//!     for value in &[1, 6, 4, 12] {
//!         set.add(*value);
//!     }
//!     set.remove(&6);
//!     set.inorder().into_iter().cloned().collect()
//! }
//!
//! assert_eq!(fill(&mut AvlSet::<u32>::new()), vec![1, 4, 12]);
//! assert_eq!(fill(&mut RedBlackSet::<u32>::new()), vec![1, 4, 12]);
//! ```

pub mod arena;
pub mod avl_tree;
pub mod compare;
mod error;
pub mod red_black_tree;
mod set;

pub use crate::error::{Error, Result};
pub use crate::set::{OrderedSet, Set};
