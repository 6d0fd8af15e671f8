//! Size-balanced pointer heap (min or max).
//!
//! Completeness is approximated by a shape rule instead of array
//! indexing: insertion descends into the subtree with fewer nodes
//! (ties left) and removal pulls a leaf from the subtree with more
//! nodes (ties right). Reordering is done with the structural swap
//! from [`crate::swap`], never by moving values between nodes.

use thiserror::Error;

use crate::node::{take_value, value_of, BinaryNode};
use crate::swap::swap;
use crate::types::default_comparator;
use crate::util::{get_l, get_p, get_r, set_l, set_p, set_r, subtree_size};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeapError {
    #[error("heap is empty")]
    Empty,
    #[error("value already exists in heap")]
    Duplicate,
}

/// Whether the best priority is the smallest or the largest value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeapKind {
    Min,
    Max,
}

/// Pointer-linked binary heap over the shared arena node.
///
/// Equal values are never tolerated: a comparison that observes a
/// tie fails with [`HeapError::Duplicate`], unlike the search tree
/// which reports duplicates through a boolean.
pub struct BinaryHeap<T, C = fn(&T, &T) -> i32>
where
    C: Fn(&T, &T) -> i32,
{
    kind: HeapKind,
    root: Option<u32>,
    size: usize,
    comparator: C,
    arena: Vec<BinaryNode<T>>,
}

impl<T> BinaryHeap<T>
where
    T: PartialOrd,
{
    pub fn new(kind: HeapKind) -> Self {
        Self::with_comparator(kind, default_comparator::<T>)
    }
}

impl<T, C> BinaryHeap<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    pub fn with_comparator(kind: HeapKind, comparator: C) -> Self {
        Self {
            kind,
            root: None,
            size: 0,
            comparator,
            arena: Vec::new(),
        }
    }

    pub fn kind(&self) -> HeapKind {
        self.kind
    }

    fn push_node(&mut self, value: T) -> u32 {
        self.arena.push(BinaryNode::new(value));
        (self.arena.len() - 1) as u32
    }

    fn orient(&self, cmp: i32) -> i32 {
        match self.kind {
            HeapKind::Min => cmp,
            HeapKind::Max => -cmp,
        }
    }

    /// Directional ordering between two attached nodes. Positive
    /// means `a` belongs below `b`; a tie is a duplicate value.
    fn priority(&self, a: u32, b: u32) -> Result<i32, HeapError> {
        let cmp = (self.comparator)(value_of(&self.arena, a), value_of(&self.arena, b));
        if cmp == 0 {
            return Err(HeapError::Duplicate);
        }
        Ok(self.orient(cmp))
    }

    /// First node missing a child, reached by descending into the
    /// smaller subtree at every level (ties toward the left).
    fn insert_position(&self, root: u32) -> u32 {
        let mut curr = root;
        loop {
            match (get_l(&self.arena, curr), get_r(&self.arena, curr)) {
                (Some(l), Some(r)) => {
                    curr = if subtree_size(&self.arena, Some(l))
                        <= subtree_size(&self.arena, Some(r))
                    {
                        l
                    } else {
                        r
                    };
                }
                _ => return curr,
            }
        }
    }

    /// Leaf reached by descending into the larger subtree at every
    /// level (ties toward the right) — the inverse of the insertion
    /// policy, so removal shrinks what insertion grew last.
    fn remove_position(&self, root: u32) -> u32 {
        let mut curr = root;
        loop {
            curr = match (get_l(&self.arena, curr), get_r(&self.arena, curr)) {
                (None, None) => return curr,
                (Some(l), None) => l,
                (None, Some(r)) => r,
                (Some(l), Some(r)) => {
                    if subtree_size(&self.arena, Some(l)) <= subtree_size(&self.arena, Some(r)) {
                        r
                    } else {
                        l
                    }
                }
            };
        }
    }

    /// Adds a value and bubbles it toward the root.
    ///
    /// A duplicate met along the bubble path fails with
    /// [`HeapError::Duplicate`] before any link is touched, leaving
    /// the heap unchanged.
    pub fn insert(&mut self, value: T) -> Result<(), HeapError> {
        let Some(root) = self.root else {
            let node = self.push_node(value);
            self.root = Some(node);
            self.size = 1;
            return Ok(());
        };

        let target = self.insert_position(root);

        // The bubble path is the ancestor chain of the attach point;
        // run its comparisons up front so a duplicate rejects the
        // insert without mutation.
        let mut curr = Some(target);
        while let Some(i) = curr {
            let cmp = (self.comparator)(value_of(&self.arena, i), &value);
            if cmp == 0 {
                return Err(HeapError::Duplicate);
            }
            if self.orient(cmp) < 0 {
                break;
            }
            curr = get_p(&self.arena, i);
        }

        let node = self.push_node(value);
        set_p(&mut self.arena, node, Some(target));
        if get_l(&self.arena, target).is_none() {
            set_l(&mut self.arena, target, Some(node));
        } else {
            set_r(&mut self.arena, target, Some(node));
        }

        let mut tree_root = root;
        while let Some(p) = get_p(&self.arena, node) {
            if self.priority(p, node)? <= 0 {
                break;
            }
            tree_root = swap(&mut self.arena, tree_root, p, node);
        }
        self.root = Some(tree_root);
        self.size += 1;
        Ok(())
    }

    /// Inserts every value in order. The first failure is reported
    /// after the remaining values have still been attempted.
    pub fn insert_all(&mut self, values: impl IntoIterator<Item = T>) -> Result<(), HeapError> {
        let mut result = Ok(());
        for value in values {
            let outcome = self.insert(value);
            if result.is_ok() {
                result = outcome;
            }
        }
        result
    }

    /// The root's value.
    pub fn top(&self) -> Result<&T, HeapError> {
        match self.root {
            Some(root) => Ok(value_of(&self.arena, root)),
            None => Err(HeapError::Empty),
        }
    }

    /// Removes and returns the root's value.
    pub fn remove_top(&mut self) -> Result<T, HeapError> {
        let root = self.root.ok_or(HeapError::Empty)?;
        let replacement = self.remove_position(root);
        if replacement == root {
            let value = take_value(&mut self.arena, root);
            self.clear();
            return Ok(value);
        }

        let value = take_value(&mut self.arena, root);

        // Detach the replacement leaf, then relocate it into the
        // root position, adopting the old root's children.
        if let Some(p) = get_p(&self.arena, replacement) {
            if get_l(&self.arena, p) == Some(replacement) {
                set_l(&mut self.arena, p, None);
            } else {
                set_r(&mut self.arena, p, None);
            }
        }
        set_p(&mut self.arena, replacement, None);
        let root_l = get_l(&self.arena, root);
        let root_r = get_r(&self.arena, root);
        set_l(&mut self.arena, replacement, root_l);
        if let Some(root_l) = root_l {
            set_p(&mut self.arena, root_l, Some(replacement));
        }
        set_r(&mut self.arena, replacement, root_r);
        if let Some(root_r) = root_r {
            set_p(&mut self.arena, root_r, Some(replacement));
        }
        set_l(&mut self.arena, root, None);
        set_r(&mut self.arena, root, None);
        self.root = Some(replacement);

        // Sift down: with a single left child swap only when the
        // child outranks us; with two children stop once we beat
        // both, otherwise swap with the mutually better child.
        let mut tree_root = replacement;
        let curr = replacement;
        loop {
            match (get_l(&self.arena, curr), get_r(&self.arena, curr)) {
                (None, None) => break,
                (Some(l), None) => {
                    if self.priority(l, curr)? < 0 {
                        tree_root = swap(&mut self.arena, tree_root, curr, l);
                    } else {
                        break;
                    }
                }
                (Some(l), Some(r)) => {
                    if self.priority(curr, l)? < 0 && self.priority(curr, r)? < 0 {
                        break;
                    }
                    let down = if self.priority(l, r)? < 0 { l } else { r };
                    tree_root = swap(&mut self.arena, tree_root, curr, down);
                }
                // A right-only node cannot arise under the shape rule.
                (None, Some(_)) => break,
            }
        }
        self.root = Some(tree_root);
        self.size -= 1;
        Ok(value)
    }

    /// Resets to the empty state and releases the arena.
    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
        self.arena.clear();
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}
