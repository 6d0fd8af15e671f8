//! Arena-based binary tree family.
//!
//! Provides the shared binary-node linkage model and two structures
//! built on top of it:
//!
//! - [`BinarySearchTree`] — comparator-keyed ordered tree with
//!   boolean insert/delete/search outcomes.
//! - [`BinaryHeap`] — min/max pointer heap that approximates a
//!   complete tree through a subtree-size shape rule instead of
//!   array indexing.
//!
//! Instead of raw pointers, all "pointers" are `Option<u32>` indices
//! into a `Vec`-backed arena owned by the containing structure, so
//! parent back-references never form ownership cycles.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`] trait, comparator alias, [`Relationship`] |
//! | [`node`] | [`BinaryNode`], the concrete arena node |
//! | [`util`] | linkage queries and index traversals |
//! | [`swap`] | the structural parent/child exchange |
//! | [`bst`] | [`BinarySearchTree`] |
//! | [`heap`] | [`BinaryHeap`] |

pub mod bst;
pub mod heap;
pub mod node;
pub mod swap;
pub mod types;
pub mod util;

pub use bst::BinarySearchTree;
pub use heap::{BinaryHeap, HeapError, HeapKind};
pub use node::BinaryNode;
pub use swap::swap;
pub use types::{default_comparator, Comparator, Node, Relationship};
pub use util::{
    child_count, in_order, is_leaf, is_root, min_in_subtree, post_order, pre_order, relationship,
    subtree_size,
};
