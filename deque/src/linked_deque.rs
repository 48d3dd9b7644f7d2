//! Pooled doubly-linked deque implementation.

use crate::Deque;
use crate::pool::{NIL, NodePool};

/// A deque backed by doubly-linked nodes drawn from a reuse pool.
///
/// Push and pop at either end are O(1). Detached nodes are cleared and
/// recycled through an internal free list rather than freed, so alternating
/// push/pop churn does not allocate once the deque has reached its working
/// size.
///
/// # Example
///
/// ```
/// use pocket_deque::{Deque, LinkedDeque};
///
/// let mut d = LinkedDeque::new();
/// d.push_back("b");
/// d.push_front("a");
/// d.push_back("c");
/// assert_eq!(d.pop_front(), Some("a"));
/// assert_eq!(d.pop_back(), Some("c"));
/// ```
pub struct LinkedDeque<T> {
    pool: NodePool<T>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> LinkedDeque<T> {
    /// Creates a valid empty deque.
    pub fn new() -> Self {
        LinkedDeque {
            pool: NodePool::new(),
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    /// Builds a deque from initial values, front first.
    ///
    /// Returns `None` when `values` yields nothing. An explicitly empty
    /// value list means "no deque", which is distinct from the valid empty
    /// deque that [`new`](LinkedDeque::new) returns; callers must check.
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut deque = Self::new();
        for value in values {
            deque.push_back(value);
        }
        if deque.is_empty() { None } else { Some(deque) }
    }

    /// Number of arena slots, live and pooled. Test probe for reuse.
    #[cfg(test)]
    fn arena_slots(&self) -> usize {
        self.pool.slots()
    }
}

impl<T> Default for LinkedDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deque<T> for LinkedDeque<T> {
    fn push_front(&mut self, value: T) {
        let idx = self.pool.acquire(value, NIL, self.head);
        if self.head == NIL {
            self.tail = idx;
        } else {
            self.pool.get_mut(self.head).prev = idx;
        }
        self.head = idx;
        self.len += 1;
    }

    fn push_back(&mut self, value: T) {
        let idx = self.pool.acquire(value, self.tail, NIL);
        if self.tail == NIL {
            self.head = idx;
        } else {
            self.pool.get_mut(self.tail).next = idx;
        }
        self.tail = idx;
        self.len += 1;
    }

    fn front(&self) -> Option<&T> {
        if self.head == NIL {
            None
        } else {
            self.pool.get(self.head).value.as_ref()
        }
    }

    fn back(&self) -> Option<&T> {
        if self.tail == NIL {
            None
        } else {
            self.pool.get(self.tail).value.as_ref()
        }
    }

    fn pop_front(&mut self) -> Option<T> {
        if self.head == NIL {
            return None;
        }
        let idx = self.head;
        let next = self.pool.get(idx).next;
        self.head = next;
        if next == NIL {
            self.tail = NIL;
        } else {
            self.pool.get_mut(next).prev = NIL;
        }
        self.len -= 1;
        self.pool.release(idx)
    }

    fn pop_back(&mut self) -> Option<T> {
        if self.tail == NIL {
            return None;
        }
        let idx = self.tail;
        let prev = self.pool.get(idx).prev;
        self.tail = prev;
        if prev == NIL {
            self.head = NIL;
        } else {
            self.pool.get_mut(prev).next = NIL;
        }
        self.len -= 1;
        self.pool.release(idx)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn peek_each_front<F>(&self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut idx = self.head;
        while idx != NIL {
            let node = self.pool.get(idx);
            if let Some(ref value) = node.value {
                if !f(value) {
                    break;
                }
            }
            idx = node.next;
        }
    }

    fn peek_each_back<F>(&self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut idx = self.tail;
        while idx != NIL {
            let node = self.pool.get(idx);
            if let Some(ref value) = node.value {
                if !f(value) {
                    break;
                }
            }
            idx = node.prev;
        }
    }
}
