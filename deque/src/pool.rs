//! Node arena with free-list reuse for the linked deque.

/// Sentinel index marking the absence of a neighbor.
pub(crate) const NIL: usize = usize::MAX;

pub(crate) struct Node<T> {
    pub(crate) value: Option<T>,
    pub(crate) prev: usize,
    pub(crate) next: usize,
}

/// Slab of doubly-linked nodes with a free list.
///
/// Detached nodes are cleared and recycled instead of deallocated, so
/// steady-state push/pop churn performs no allocation. Slots on the free
/// list hold no payload and no links.
pub(crate) struct NodePool<T> {
    slots: Vec<Node<T>>,
    free: Vec<usize>,
}

impl<T> NodePool<T> {
    pub(crate) fn new() -> Self {
        NodePool {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Takes a recycled slot if one is available, otherwise grows the arena.
    pub(crate) fn acquire(&mut self, value: T, prev: usize, next: usize) -> usize {
        match self.free.pop() {
            Some(idx) => {
                let node = &mut self.slots[idx];
                node.value = Some(value);
                node.prev = prev;
                node.next = next;
                idx
            }
            None => {
                self.slots.push(Node {
                    value: Some(value),
                    prev,
                    next,
                });
                self.slots.len() - 1
            }
        }
    }

    /// Clears the node and puts its slot on the free list, returning the
    /// payload.
    pub(crate) fn release(&mut self, idx: usize) -> Option<T> {
        let node = &mut self.slots[idx];
        let value = node.value.take();
        node.prev = NIL;
        node.next = NIL;
        self.free.push(idx);
        value
    }

    pub(crate) fn get(&self, idx: usize) -> &Node<T> {
        &self.slots[idx]
    }

    pub(crate) fn get_mut(&mut self, idx: usize) -> &mut Node<T> {
        &mut self.slots[idx]
    }

    /// Total slots ever allocated, live and pooled.
    pub(crate) fn slots(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_grows_then_reuses() {
        let mut pool = NodePool::new();
        let a = pool.acquire(1, NIL, NIL);
        let b = pool.acquire(2, a, NIL);
        assert_eq!(b, 1);
        assert_eq!(pool.slots(), 2);

        pool.release(a);
        let c = pool.acquire(3, b, NIL);
        assert_eq!(c, a);
        assert_eq!(pool.slots(), 2);
    }

    #[test]
    fn test_release_clears_node() {
        let mut pool = NodePool::new();
        let idx = pool.acquire("payload", NIL, NIL);
        assert_eq!(pool.release(idx), Some("payload"));

        let node = pool.get(idx);
        assert!(node.value.is_none());
        assert_eq!(node.prev, NIL);
        assert_eq!(node.next, NIL);
    }
}
