//! Binary search tree over the shared arena node.
//!
//! Ordering is supplied by a caller comparator; the tree holds at
//! most one occurrence of each value. All outcomes are booleans —
//! there are no error paths in this structure.

use crate::node::{take_value, value_of, BinaryNode};
use crate::types::{default_comparator, Relationship};
use crate::util::{
    get_l, get_p, get_r, in_order, min_in_subtree, post_order, pre_order, relationship, set_l,
    set_p, set_r,
};

/// Ordered binary tree: every value in a node's left subtree orders
/// before the node, everything in its right subtree after.
pub struct BinarySearchTree<T, C = fn(&T, &T) -> i32>
where
    C: Fn(&T, &T) -> i32,
{
    root: Option<u32>,
    size: usize,
    comparator: C,
    arena: Vec<BinaryNode<T>>,
}

impl<T> BinarySearchTree<T>
where
    T: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<T>)
    }
}

impl<T> Default for BinarySearchTree<T>
where
    T: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> BinarySearchTree<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            size: 0,
            comparator,
            arena: Vec::new(),
        }
    }

    fn push_node(&mut self, value: T) -> u32 {
        self.arena.push(BinaryNode::new(value));
        (self.arena.len() - 1) as u32
    }

    /// Adds a value, returning `false` without mutating if an equal
    /// value is met anywhere along the descent path.
    pub fn insert(&mut self, value: T) -> bool {
        let Some(root) = self.root else {
            let node = self.push_node(value);
            self.root = Some(node);
            self.size = 1;
            return true;
        };

        let mut curr = root;
        let side = loop {
            let cmp = (self.comparator)(&value, value_of(&self.arena, curr));
            if cmp == 0 {
                return false;
            }
            if cmp < 0 {
                match get_l(&self.arena, curr) {
                    Some(l) => curr = l,
                    None => break Relationship::LeftChild,
                }
            } else {
                match get_r(&self.arena, curr) {
                    Some(r) => curr = r,
                    None => break Relationship::RightChild,
                }
            }
        };

        let node = self.push_node(value);
        set_p(&mut self.arena, node, Some(curr));
        if side == Relationship::LeftChild {
            set_l(&mut self.arena, curr, Some(node));
        } else {
            set_r(&mut self.arena, curr, Some(node));
        }
        self.size += 1;
        true
    }

    /// Inserts every value in order; `true` only if all succeeded.
    pub fn insert_all(&mut self, values: impl IntoIterator<Item = T>) -> bool {
        let mut ok = true;
        for value in values {
            ok &= self.insert(value);
        }
        ok
    }

    fn find(&self, value: &T) -> Option<u32> {
        let mut curr = self.root;
        while let Some(i) = curr {
            let cmp = (self.comparator)(value, value_of(&self.arena, i));
            if cmp == 0 {
                return Some(i);
            }
            curr = if cmp < 0 {
                get_l(&self.arena, i)
            } else {
                get_r(&self.arena, i)
            };
        }
        None
    }

    /// Removes a value, returning `false` if it is absent.
    pub fn delete(&mut self, value: &T) -> bool {
        let Some(node) = self.find(value) else {
            return false;
        };

        match (get_l(&self.arena, node), get_r(&self.arena, node)) {
            (None, None) => match get_p(&self.arena, node) {
                Some(p) => {
                    if relationship(&self.arena, p, node) == Relationship::LeftChild {
                        set_l(&mut self.arena, p, None);
                    } else {
                        set_r(&mut self.arena, p, None);
                    }
                }
                None => self.root = None,
            },
            (Some(child), None) | (None, Some(child)) => {
                // Splice the only child into the deleted node's spot.
                let p = get_p(&self.arena, node);
                set_p(&mut self.arena, child, p);
                match p {
                    Some(p) => {
                        if relationship(&self.arena, p, node) == Relationship::LeftChild {
                            set_l(&mut self.arena, p, Some(child));
                        } else {
                            set_r(&mut self.arena, p, Some(child));
                        }
                    }
                    None => self.root = Some(child),
                }
            }
            (Some(_), Some(node_r)) => {
                // Two children: transplant the in-order successor.
                // The successor has no left child; its right child
                // (if any) is promoted into its old position first.
                let succ = min_in_subtree(&self.arena, node_r);
                let succ_r = get_r(&self.arena, succ);
                if let Some(succ_p) = get_p(&self.arena, succ) {
                    if relationship(&self.arena, succ_p, succ) == Relationship::LeftChild {
                        set_l(&mut self.arena, succ_p, succ_r);
                    } else {
                        set_r(&mut self.arena, succ_p, succ_r);
                    }
                }
                if let Some(succ_r) = succ_r {
                    let succ_p = get_p(&self.arena, succ);
                    set_p(&mut self.arena, succ_r, succ_p);
                }

                // Read the deleted node's links after the splice: if
                // the successor was its direct right child, the right
                // link has already been replaced.
                let p = get_p(&self.arena, node);
                let l = get_l(&self.arena, node);
                let r = get_r(&self.arena, node);
                set_p(&mut self.arena, succ, p);
                set_l(&mut self.arena, succ, l);
                set_r(&mut self.arena, succ, r);
                if let Some(l) = l {
                    set_p(&mut self.arena, l, Some(succ));
                }
                if let Some(r) = r {
                    set_p(&mut self.arena, r, Some(succ));
                }
                match p {
                    Some(p) => {
                        if relationship(&self.arena, p, node) == Relationship::LeftChild {
                            set_l(&mut self.arena, p, Some(succ));
                        } else {
                            set_r(&mut self.arena, p, Some(succ));
                        }
                    }
                    None => self.root = Some(succ),
                }
            }
        }

        // Fully detach the slot; it is never revisited.
        set_p(&mut self.arena, node, None);
        set_l(&mut self.arena, node, None);
        set_r(&mut self.arena, node, None);
        let _ = take_value(&mut self.arena, node);
        self.size -= 1;
        true
    }

    /// True if the value exists in the tree.
    pub fn search(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Depth of the value's node: 0 for the root, -1 if absent.
    pub fn depth(&self, value: &T) -> i32 {
        let mut depth = 0;
        let mut curr = self.root;
        while let Some(i) = curr {
            let cmp = (self.comparator)(value, value_of(&self.arena, i));
            if cmp == 0 {
                return depth;
            }
            curr = if cmp < 0 {
                get_l(&self.arena, i)
            } else {
                get_r(&self.arena, i)
            };
            depth += 1;
        }
        -1
    }

    /// In-order traversal; non-decreasing under the comparator.
    pub fn in_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        in_order(&self.arena, self.root)
            .into_iter()
            .map(|i| value_of(&self.arena, i).clone())
            .collect()
    }

    /// Pre-order traversal.
    pub fn pre_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        pre_order(&self.arena, self.root)
            .into_iter()
            .map(|i| value_of(&self.arena, i).clone())
            .collect()
    }

    /// Post-order traversal.
    pub fn post_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        post_order(&self.arena, self.root)
            .into_iter()
            .map(|i| value_of(&self.arena, i).clone())
            .collect()
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
