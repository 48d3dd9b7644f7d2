//! Thread-safe bounded line buffer.
//!
//! This crate provides [`LineBuffer`], a fixed-capacity circular buffer of
//! text lines. When the buffer is full, appending new lines discards the
//! oldest ones, so the buffer always holds the most recent window of output.
//! It is intended for things like terminal UIs that render the tail of a
//! process's log stream.
//!
//! # Feeding from a source
//!
//! A buffer can be constructed over any [`std::io::Read`] source, in which
//! case a background thread consumes newline-delimited lines from the source
//! and appends them as they arrive:
//!
//! ```
//! use pocket_linebuffer::LineBuffer;
//! use std::io::Cursor;
//!
//! let buf = LineBuffer::with_source(8, Cursor::new("alpha\nbeta\ngamma\n"));
//!
//! // done() disconnects once the source is exhausted.
//! let _ = buf.done().recv();
//! assert_eq!(buf.to_vec(), vec!["alpha", "beta", "gamma"]);
//! # buf.close().unwrap();
//! ```
//!
//! # Update notifications
//!
//! Consumers watch the buffer through [`LineBuffer::updates`], a single-slot
//! channel that coalesces rapid mutations into one pending wake-up. Sends
//! never block the writer and never queue a backlog; after any mutation the
//! consumer has not yet observed, at least one notification is pending.
//!
//! ```
//! use pocket_linebuffer::LineBuffer;
//!
//! let buf = LineBuffer::new(4);
//! let updates = buf.updates();
//!
//! buf.add(["one"]);
//! buf.add(["two"]);
//!
//! // Two rapid mutations, one pending wake-up.
//! assert!(updates.try_recv().is_ok());
//! assert!(updates.try_recv().is_err());
//! ```
//!
//! # Thread Safety
//!
//! `LineBuffer` is `Send + Sync` and can be shared between threads using
//! `Clone` (which shares the underlying buffer via `Arc`). Mutators take an
//! exclusive lock; readers take a shared lock.

mod error;
mod line_buffer;
mod notify;

pub use error::CloseError;
pub use line_buffer::{LineBuffer, MAX_CAPACITY};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_buffer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LineBuffer>();
    }

    #[test]
    fn test_line_buffer_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<LineBuffer>();
    }
}
