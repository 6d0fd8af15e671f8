//! Linkage queries and traversals shared by the tree structures.
//!
//! All functions are free functions over a node arena; mutating
//! helpers take `&mut [N]` and structure roots are passed explicitly.

use crate::types::{Node, Relationship};

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], i: u32) -> Option<u32> {
    arena[i as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], i: u32) -> Option<u32> {
    arena[i as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], i: u32) -> Option<u32> {
    arena[i as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], i: u32, v: Option<u32>) {
    arena[i as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], i: u32, v: Option<u32>) {
    arena[i as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], i: u32, v: Option<u32>) {
    arena[i as usize].set_r(v);
}

/// Which structural role `b` plays relative to `a`.
///
/// Pure identity comparison on indices, O(1). Every pointer-repair
/// routine in this crate goes through this instead of ad-hoc link
/// checks.
pub fn relationship<N: Node>(arena: &[N], a: u32, b: u32) -> Relationship {
    if get_l(arena, a) == Some(b) {
        return Relationship::LeftChild;
    }
    if get_r(arena, a) == Some(b) {
        return Relationship::RightChild;
    }
    if get_p(arena, a) == Some(b) {
        return Relationship::Parent;
    }
    Relationship::None
}

/// True iff the node has no parent.
pub fn is_root<N: Node>(arena: &[N], i: u32) -> bool {
    get_p(arena, i).is_none()
}

/// True iff the node has no children.
pub fn is_leaf<N: Node>(arena: &[N], i: u32) -> bool {
    get_l(arena, i).is_none() && get_r(arena, i).is_none()
}

/// Number of children (0, 1 or 2).
pub fn child_count<N: Node>(arena: &[N], i: u32) -> usize {
    usize::from(get_l(arena, i).is_some()) + usize::from(get_r(arena, i).is_some())
}

fn subtree_size_inner<N: Node>(arena: &[N], root: u32) -> usize {
    1 + get_l(arena, root).map_or(0, |l| subtree_size_inner(arena, l))
        + get_r(arena, root).map_or(0, |r| subtree_size_inner(arena, r))
}

/// Number of nodes under `root`, inclusive.
pub fn subtree_size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    root.map_or(0, |r| subtree_size_inner(arena, r))
}

/// Leftmost descendant of `node` (the subtree minimum in an ordered
/// tree). Guaranteed to have no left child.
pub fn min_in_subtree<N: Node>(arena: &[N], node: u32) -> u32 {
    let mut curr = node;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    curr
}

fn in_order_inner<N: Node>(arena: &[N], node: u32, out: &mut Vec<u32>) {
    if let Some(l) = get_l(arena, node) {
        in_order_inner(arena, l, out);
    }
    out.push(node);
    if let Some(r) = get_r(arena, node) {
        in_order_inner(arena, r, out);
    }
}

/// In-order index traversal. A fresh sequence per call.
pub fn in_order<N: Node>(arena: &[N], root: Option<u32>) -> Vec<u32> {
    let mut out = Vec::new();
    if let Some(root) = root {
        in_order_inner(arena, root, &mut out);
    }
    out
}

fn pre_order_inner<N: Node>(arena: &[N], node: u32, out: &mut Vec<u32>) {
    out.push(node);
    if let Some(l) = get_l(arena, node) {
        pre_order_inner(arena, l, out);
    }
    if let Some(r) = get_r(arena, node) {
        pre_order_inner(arena, r, out);
    }
}

/// Pre-order index traversal.
pub fn pre_order<N: Node>(arena: &[N], root: Option<u32>) -> Vec<u32> {
    let mut out = Vec::new();
    if let Some(root) = root {
        pre_order_inner(arena, root, &mut out);
    }
    out
}

fn post_order_inner<N: Node>(arena: &[N], node: u32, out: &mut Vec<u32>) {
    if let Some(l) = get_l(arena, node) {
        post_order_inner(arena, l, out);
    }
    if let Some(r) = get_r(arena, node) {
        post_order_inner(arena, r, out);
    }
    out.push(node);
}

/// Post-order index traversal.
pub fn post_order<N: Node>(arena: &[N], root: Option<u32>) -> Vec<u32> {
    let mut out = Vec::new();
    if let Some(root) = root {
        post_order_inner(arena, root, &mut out);
    }
    out
}
