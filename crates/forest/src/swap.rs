//! Structural parent/child exchange.
//!
//! Exchanges a parent and one of its children in the pointer graph
//! without touching stored values. Six-plus links change per call
//! (grandparent, sibling, both of the child's subtrees, and the two
//! principals), so this lives in its own module with an exhaustive
//! test matrix rather than inline in the heap.

use crate::types::{Node, Relationship};
use crate::util::{get_l, get_p, get_r, relationship, set_l, set_p, set_r};

/// Swaps `child` into `parent`'s position in the pointer graph.
///
/// `child` must be a direct child of `parent`. The child's sibling
/// and both of the child's subtrees are preserved, and the
/// grandparent link is reattached. Returns the tree's root index
/// after the exchange; it changes exactly when `parent` was the
/// root.
pub fn swap<N: Node>(arena: &mut [N], root: u32, parent: u32, child: u32) -> u32 {
    let side = relationship(arena, parent, child);
    debug_assert!(
        matches!(side, Relationship::LeftChild | Relationship::RightChild),
        "swap requires a direct parent/child pair"
    );

    let top = get_p(arena, parent);
    let bottom_l = get_l(arena, child);
    let bottom_r = get_r(arena, child);
    let sibling = if side == Relationship::LeftChild {
        get_r(arena, parent)
    } else {
        get_l(arena, parent)
    };

    // The child takes the parent's place: the parent hangs off the
    // side the child occupied, the sibling keeps its side.
    set_p(arena, child, top);
    if side == Relationship::LeftChild {
        set_l(arena, child, Some(parent));
        set_r(arena, child, sibling);
    } else {
        set_r(arena, child, Some(parent));
        set_l(arena, child, sibling);
    }
    if let Some(sibling) = sibling {
        set_p(arena, sibling, Some(child));
    }
    if let Some(top) = top {
        if get_l(arena, top) == Some(parent) {
            set_l(arena, top, Some(child));
        } else {
            set_r(arena, top, Some(child));
        }
    }

    // The parent adopts the child's former subtrees.
    set_l(arena, parent, bottom_l);
    if let Some(bottom_l) = bottom_l {
        set_p(arena, bottom_l, Some(parent));
    }
    set_r(arena, parent, bottom_r);
    if let Some(bottom_r) = bottom_r {
        set_p(arena, bottom_r, Some(parent));
    }
    set_p(arena, parent, Some(child));

    if top.is_none() {
        child
    } else {
        root
    }
}
