//! Error types for line buffer operations.

/// Error returned by [`LineBuffer::close`](crate::LineBuffer::close).
///
/// Closing the buffer joins the background scanner thread, so the only
/// failure that can surface here is the scanner having panicked. A buffer
/// constructed without a source never returns an error from `close`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CloseError {
    /// The background scanner thread panicked before it could finish.
    #[error("line buffer: scanner thread panicked")]
    ScannerPanicked,
}
