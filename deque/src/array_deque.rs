//! Array-backed deque implementation.

use crate::Deque;

/// A deque backed by a single growable array.
///
/// `push_back`/`pop_back` are amortized O(1); `push_front`/`pop_front` shift
/// every existing element (O(n)). This trade is deliberate: for small bounded
/// windows fed mostly from one end, a flat array beats per-node allocation.
///
/// # Example
///
/// ```
/// use pocket_deque::{ArrayDeque, Deque};
///
/// let mut d = ArrayDeque::from(vec![2, 3]);
/// d.push_front(1);
/// d.push_back(4);
/// assert_eq!(d.pop_front(), Some(1));
/// assert_eq!(d.pop_back(), Some(4));
/// assert_eq!(d.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayDeque<T> {
    items: Vec<T>,
}

impl<T> ArrayDeque<T> {
    /// Creates an empty deque.
    pub fn new() -> Self {
        ArrayDeque { items: Vec::new() }
    }

    /// Creates an empty deque with space reserved for `capacity` elements.
    ///
    /// The capacity is a hint; the deque grows past it as needed.
    pub fn with_capacity(capacity: usize) -> Self {
        ArrayDeque {
            items: Vec::with_capacity(capacity),
        }
    }
}

impl<T> Default for ArrayDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for ArrayDeque<T> {
    /// Builds a deque whose front is the first element of `items`.
    fn from(items: Vec<T>) -> Self {
        ArrayDeque { items }
    }
}

impl<T> FromIterator<T> for ArrayDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ArrayDeque {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Deque<T> for ArrayDeque<T> {
    fn push_front(&mut self, value: T) {
        self.items.insert(0, value);
    }

    fn push_back(&mut self, value: T) {
        self.items.push(value);
    }

    fn front(&self) -> Option<&T> {
        self.items.first()
    }

    fn back(&self) -> Option<&T> {
        self.items.last()
    }

    fn pop_front(&mut self) -> Option<T> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    fn pop_back(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn peek_each_front<F>(&self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        for item in &self.items {
            if !f(item) {
                break;
            }
        }
    }

    fn peek_each_back<F>(&self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        for item in self.items.iter().rev() {
            if !f(item) {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_order() {
        let mut d = ArrayDeque::from(vec![1, 2, 3]);
        assert_eq!(d.front(), Some(&1));
        assert_eq!(d.back(), Some(&3));
        assert_eq!(d.pop_front(), Some(1));
        assert_eq!(d.pop_back(), Some(3));
    }

    #[test]
    fn test_with_capacity_starts_empty() {
        let d = ArrayDeque::<i32>::with_capacity(16);
        assert!(d.is_empty());
        assert_eq!(d.len(), 0);
    }

    #[test]
    fn test_push_front_shifts() {
        let mut d = ArrayDeque::new();
        d.push_front(3);
        d.push_front(2);
        d.push_front(1);
        assert_eq!(d.items, vec![1, 2, 3]);
    }

    #[test]
    fn test_from_iterator() {
        let d: ArrayDeque<i32> = (0..4).collect();
        assert_eq!(d.len(), 4);
        assert_eq!(d.front(), Some(&0));
        assert_eq!(d.back(), Some(&3));
    }
}
