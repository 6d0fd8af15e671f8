//! Sorted linked priority queue.
//!
//! A singly linked list kept sorted by descending rank. Links are
//! `Option<u32>` indices into a `Vec`-backed arena; dequeued slots
//! stay behind empty until [`LinkedPriorityQueue::clear`].

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    #[error("queue is empty")]
    Empty,
}

struct QueueSlot<T> {
    value: Option<T>,
    next: Option<u32>,
}

/// Priority queue backed by a sorted linked list.
///
/// The predicate returns a positive value when `a` outranks `b`,
/// zero for equal rank, negative otherwise. Entries of equal rank
/// keep their insertion order (FIFO) — consumers such as Dijkstra
/// rely on that tie-break being deterministic.
pub struct LinkedPriorityQueue<T, P = fn(&T, &T) -> i32>
where
    P: Fn(&T, &T) -> i32,
{
    head: Option<u32>,
    size: usize,
    predicate: P,
    arena: Vec<QueueSlot<T>>,
}

impl<T, P> LinkedPriorityQueue<T, P>
where
    P: Fn(&T, &T) -> i32,
{
    pub fn with_predicate(predicate: P) -> Self {
        Self {
            head: None,
            size: 0,
            predicate,
            arena: Vec::new(),
        }
    }

    #[inline]
    fn value_at(&self, i: u32) -> &T {
        // Linked slots always hold a value.
        self.arena[i as usize].value.as_ref().unwrap()
    }

    /// Inserts after every entry of equal or higher rank and before
    /// the first strictly lower-ranked entry.
    pub fn enqueue(&mut self, value: T) {
        let mut prev: Option<u32> = None;
        let mut curr = self.head;
        while let Some(i) = curr {
            if (self.predicate)(&value, self.value_at(i)) > 0 {
                break;
            }
            prev = Some(i);
            curr = self.arena[i as usize].next;
        }

        self.arena.push(QueueSlot {
            value: Some(value),
            next: curr,
        });
        let node = (self.arena.len() - 1) as u32;
        match prev {
            Some(prev) => self.arena[prev as usize].next = Some(node),
            None => self.head = Some(node),
        }
        self.size += 1;
    }

    /// The highest-ranked entry.
    pub fn peek(&self) -> Result<&T, QueueError> {
        match self.head {
            Some(head) => Ok(self.value_at(head)),
            None => Err(QueueError::Empty),
        }
    }

    /// Removes and returns the highest-ranked entry.
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        let head = self.head.ok_or(QueueError::Empty)?;
        self.head = self.arena[head as usize].next;
        self.size -= 1;
        // Linked slots always hold a value.
        Ok(self.arena[head as usize].value.take().unwrap())
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn len(&self) -> usize {
        self.size
    }

    /// Resets to the empty state and releases the arena.
    pub fn clear(&mut self) {
        self.head = None;
        self.size = 0;
        self.arena.clear();
    }
}
