//! Node trait and comparator definitions.
//!
//! Every tree in this crate keeps its nodes in a `Vec`-backed arena
//! and expresses links as `Option<u32>` indices into that arena.
//! Link manipulation goes through the [`Node`] trait so the linkage
//! queries in [`crate::util`] and the structural exchange in
//! [`crate::swap`] stay independent of the payload type.

/// Binary links (`p`, `l`, `r`) of an arena node.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Three-way comparator used by the tree structures.
///
/// Returns a negative value when `a` orders before `b`, zero when
/// they are equal, and a positive value when `a` orders after `b`.
pub type Comparator<T> = dyn Fn(&T, &T) -> i32;

/// Natural-order comparator for `PartialOrd` payloads.
pub fn default_comparator<T: PartialOrd>(a: &T, b: &T) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}

/// The structural role node `b` plays relative to node `a`.
///
/// Completes the sentence: `b` is `a`'s ___.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relationship {
    LeftChild,
    RightChild,
    Parent,
    None,
}
