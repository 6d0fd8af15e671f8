use crate::types::Node;

/// Shared arena node for the binary tree family.
#[derive(Clone, Debug)]
pub struct BinaryNode<T> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    // The value is wrapped in Option so removals can move it out of
    // the arena without cloning; a detached slot keeps None and is
    // never revisited.
    pub value: Option<T>,
}

impl<T> BinaryNode<T> {
    pub fn new(value: T) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            value: Some(value),
        }
    }
}

impl<T> Node for BinaryNode<T> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

/// Value of an attached node. Attached nodes always hold a value.
#[inline]
pub(crate) fn value_of<T>(arena: &[BinaryNode<T>], i: u32) -> &T {
    arena[i as usize].value.as_ref().unwrap()
}

/// Moves the value out of a node that is being detached.
#[inline]
pub(crate) fn take_value<T>(arena: &mut [BinaryNode<T>], i: u32) -> T {
    arena[i as usize].value.take().unwrap()
}
