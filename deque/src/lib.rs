//! Double-ended queues in two interchangeable forms.
//!
//! This crate provides two implementations of the same deque contract:
//!
//! - [`ArrayDeque<T>`]: a single growable array; `push_back`/`pop_back` are
//!   amortized O(1), `push_front`/`pop_front` shift elements (O(n)). Best for
//!   workloads biased toward one end — stacks and sliding windows.
//! - [`LinkedDeque<T>`]: doubly-linked nodes drawn from an internal reuse
//!   pool; O(1) push/pop at both ends with no steady-state allocation. Best
//!   for balanced front/back churn.
//!
//! Both implement the [`Deque`] trait, so callers and tests can swap one for
//! the other:
//!
//! ```
//! use pocket_deque::{ArrayDeque, Deque, LinkedDeque};
//!
//! fn drain_in_order<D: Deque<i32>>(mut d: D) -> Vec<i32> {
//!     let mut out = Vec::new();
//!     d.pop_each_front(|x| {
//!         out.push(x);
//!         true
//!     });
//!     out
//! }
//!
//! let mut a = ArrayDeque::new();
//! let mut l = LinkedDeque::new();
//! for i in 0..4 {
//!     a.push_back(i);
//!     l.push_back(i);
//! }
//! assert_eq!(drain_in_order(a), vec![0, 1, 2, 3]);
//! assert_eq!(drain_in_order(l), vec![0, 1, 2, 3]);
//! ```
//!
//! Neither deque is safe for concurrent use; both assume single-threaded
//! ownership and signal absence with `Option` rather than errors or panics.

mod array_deque;
mod linked_deque;
mod pool;

pub use array_deque::ArrayDeque;
pub use linked_deque::LinkedDeque;

/// Common contract shared by both deque variants.
///
/// The `*_or_default` accessors are the non-panicking "zero value on empty"
/// forms; the `Option`-returning accessors are their presence-checked
/// counterparts.
pub trait Deque<T> {
    /// Inserts `value` at the front.
    fn push_front(&mut self, value: T);

    /// Inserts `value` at the back.
    fn push_back(&mut self, value: T);

    /// Returns the front value, if any.
    fn front(&self) -> Option<&T>;

    /// Returns the back value, if any.
    fn back(&self) -> Option<&T>;

    /// Removes and returns the front value, if any.
    fn pop_front(&mut self) -> Option<T>;

    /// Removes and returns the back value, if any.
    fn pop_back(&mut self) -> Option<T>;

    /// Returns the current element count.
    fn len(&self) -> usize;

    /// Returns true if the deque holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Visits elements from front to back without removing them; stops early
    /// if `f` returns false. No-op when empty.
    fn peek_each_front<F>(&self, f: F)
    where
        F: FnMut(&T) -> bool;

    /// Visits elements from back to front without removing them; stops early
    /// if `f` returns false. No-op when empty.
    fn peek_each_back<F>(&self, f: F)
    where
        F: FnMut(&T) -> bool;

    /// Repeatedly pops from the front, passing each value to `f`, until the
    /// deque is empty or `f` returns false.
    fn pop_each_front<F>(&mut self, mut f: F)
    where
        F: FnMut(T) -> bool,
    {
        while let Some(value) = self.pop_front() {
            if !f(value) {
                break;
            }
        }
    }

    /// Repeatedly pops from the back, passing each value to `f`, until the
    /// deque is empty or `f` returns false.
    fn pop_each_back<F>(&mut self, mut f: F)
    where
        F: FnMut(T) -> bool,
    {
        while let Some(value) = self.pop_back() {
            if !f(value) {
                break;
            }
        }
    }

    /// Returns a clone of the front value, or `T::default()` when empty.
    fn front_or_default(&self) -> T
    where
        T: Clone + Default,
    {
        self.front().cloned().unwrap_or_default()
    }

    /// Returns a clone of the back value, or `T::default()` when empty.
    fn back_or_default(&self) -> T
    where
        T: Clone + Default,
    {
        self.back().cloned().unwrap_or_default()
    }

    /// Removes and returns the front value, or `T::default()` when empty.
    fn pop_front_or_default(&mut self) -> T
    where
        T: Default,
    {
        self.pop_front().unwrap_or_default()
    }

    /// Removes and returns the back value, or `T::default()` when empty.
    fn pop_back_or_default(&mut self) -> T
    where
        T: Default,
    {
        self.pop_back().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests;
