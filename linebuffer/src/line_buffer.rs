//! Bounded circular line buffer implementation.

use std::collections::VecDeque;
use std::io::{BufRead, BufReader, Read};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, bounded};
use tracing::{debug, warn};

use crate::error::CloseError;
use crate::notify::UpdateSignal;

/// Upper bound on the line capacity of any buffer.
///
/// Capacities passed to [`LineBuffer::new`] and [`LineBuffer::set_capacity`]
/// are silently clamped into `[0, MAX_CAPACITY]`.
pub const MAX_CAPACITY: usize = 16384;

/// A thread-safe bounded circular buffer of text lines.
///
/// `LineBuffer` retains at most `capacity` lines, discarding the oldest when
/// new lines arrive. Lines are trimmed of surrounding whitespace on entry and
/// empty lines are dropped. Every mutation fires a coalesced notification on
/// the channel returned by [`updates`](LineBuffer::updates).
///
/// # Semantics
///
/// - **Add**: never blocks, discards oldest lines when full
/// - **Read**: snapshot ([`to_vec`](LineBuffer::to_vec)) or reverse traversal
///   ([`for_each_line`](LineBuffer::for_each_line)), both under a shared lock
/// - **Close**: stops the background scanner (if any) and waits for it
///
/// # Example
///
/// ```
/// use pocket_linebuffer::LineBuffer;
///
/// let buf = LineBuffer::new(3);
/// assert_eq!(buf.add(["1", "2"]), 0);
/// assert_eq!(buf.add(["3", "4"]), 1);
/// assert_eq!(buf.to_vec(), vec!["2", "3", "4"]);
/// ```
pub struct LineBuffer {
    inner: Arc<LineBufferInner>,
}

struct LineBufferInner {
    state: RwLock<LineBufferState>,
    updates: UpdateSignal,
    // Set once by close(); the scanner polls it after each line. A read
    // blocked on an unresponsive source is not interrupted, so close() can
    // wait for as long as that read does.
    stopped: AtomicBool,
    // Disconnects when scanning completes; already disconnected when the
    // buffer was constructed without a source.
    done_rx: Receiver<()>,
    scanner: Mutex<Option<JoinHandle<()>>>,
}

struct LineBufferState {
    lines: VecDeque<String>,
    capacity: usize,
}

impl Clone for LineBuffer {
    fn clone(&self) -> Self {
        LineBuffer {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl LineBuffer {
    /// Creates a buffer that retains at most `capacity` lines.
    ///
    /// The capacity is clamped to `[0, MAX_CAPACITY]`. The buffer has no
    /// background source, so [`done`](LineBuffer::done) is disconnected from
    /// the start.
    pub fn new(capacity: usize) -> Self {
        let (done_tx, done_rx) = bounded::<()>(0);
        drop(done_tx);
        Self::build(capacity, done_rx)
    }

    /// Creates a buffer fed by a background thread reading `source`.
    ///
    /// The thread consumes newline-delimited lines and appends each via
    /// [`add`](LineBuffer::add). It exits when the source is exhausted, when
    /// a read fails (the error is swallowed), or when it observes
    /// [`close`](LineBuffer::close) after finishing a line. Completion is
    /// observable through [`done`](LineBuffer::done).
    pub fn with_source<R>(capacity: usize, source: R) -> Self
    where
        R: Read + Send + 'static,
    {
        let (done_tx, done_rx) = bounded::<()>(0);
        let buf = Self::build(capacity, done_rx);

        let worker = buf.clone();
        let handle = thread::spawn(move || {
            // Holding the sender keeps done() connected until the scan ends.
            let _done_tx = done_tx;
            worker.scan(source);
        });
        *buf.inner.scanner.lock().unwrap() = Some(handle);

        buf
    }

    fn build(capacity: usize, done_rx: Receiver<()>) -> Self {
        let capacity = capacity.min(MAX_CAPACITY);
        LineBuffer {
            inner: Arc::new(LineBufferInner {
                state: RwLock::new(LineBufferState {
                    lines: VecDeque::with_capacity(capacity.min(64)),
                    capacity,
                }),
                updates: UpdateSignal::new(),
                stopped: AtomicBool::new(false),
                done_rx,
                scanner: Mutex::new(None),
            }),
        }
    }

    fn scan<R: Read>(&self, source: R) {
        debug!("line scan started");
        for line in BufReader::new(source).lines() {
            match line {
                Ok(line) => {
                    self.add([line]);
                }
                Err(err) => {
                    warn!(error = %err, "line scan ended on read error");
                    return;
                }
            }
            if self.inner.stopped.load(Ordering::Acquire) {
                debug!("line scan observed stop");
                return;
            }
        }
        debug!("line scan reached end of source");
    }

    /// Appends lines to the buffer, returning how many lines were discarded
    /// to stay within capacity.
    ///
    /// Each incoming line is trimmed of surrounding whitespace; lines that
    /// trim down to nothing are dropped before any capacity accounting. If
    /// the cleaned batch alone reaches the capacity, the entire buffer is
    /// overwritten with the tail of the batch. The update signal fires at
    /// most once per call, however many lines were added.
    pub fn add<I, S>(&self, lines: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let batch: Vec<String> = lines
            .into_iter()
            .filter_map(|line| {
                let trimmed = line.as_ref().trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .collect();
        if batch.is_empty() {
            return 0;
        }

        let discarded = {
            let mut state = self.inner.state.write().unwrap();
            state.append(batch)
        };
        self.inner.updates.signal();
        discarded
    }

    /// Visits every line in reverse order (most recent first, index 0).
    ///
    /// Stops early if `f` returns `false`. Returns whether all lines were
    /// visited. The shared lock is held for the duration of the traversal.
    pub fn for_each_line<F>(&self, mut f: F) -> bool
    where
        F: FnMut(&str, usize) -> bool,
    {
        let state = self.inner.state.read().unwrap();
        for (i, line) in state.lines.iter().rev().enumerate() {
            if !f(line, i) {
                return false;
            }
        }
        true
    }

    /// Returns a copy of the current contents, oldest line first.
    pub fn to_vec(&self) -> Vec<String> {
        let state = self.inner.state.read().unwrap();
        state.lines.iter().cloned().collect()
    }

    /// Returns the number of lines currently retained.
    pub fn len(&self) -> usize {
        let state = self.inner.state.read().unwrap();
        state.lines.len()
    }

    /// Returns true if the buffer holds no lines.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the line capacity.
    pub fn capacity(&self) -> usize {
        let state = self.inner.state.read().unwrap();
        state.capacity
    }

    /// Changes the capacity, clamped to `[0, MAX_CAPACITY]`.
    ///
    /// Shrinking below the current length retains only the most recent
    /// `capacity` lines. Fires the update signal.
    pub fn set_capacity(&self, capacity: usize) {
        let capacity = capacity.min(MAX_CAPACITY);
        {
            let mut state = self.inner.state.write().unwrap();
            state.capacity = capacity;
            while state.lines.len() > capacity {
                state.lines.pop_front();
            }
        }
        self.inner.updates.signal();
    }

    /// Returns a receiver observing coalesced change notifications.
    ///
    /// At most one notification is pending at a time; rapid mutations
    /// collapse into a single wake-up, but any mutation the consumer has not
    /// yet observed leaves one pending. Compose timeouts with
    /// [`recv_timeout`](crossbeam_channel::Receiver::recv_timeout).
    pub fn updates(&self) -> Receiver<()> {
        self.inner.updates.subscribe()
    }

    /// Returns a receiver that disconnects once background scanning has
    /// completed.
    ///
    /// "Fired" means the channel is disconnected: `recv()` returns an error
    /// immediately for every clone of the receiver. A buffer constructed
    /// without a source is done from the start.
    pub fn done(&self) -> Receiver<()> {
        self.inner.done_rx.clone()
    }

    /// Stops the background scanner and waits for it to exit.
    ///
    /// Idempotent. The scanner checks the stop flag after each line, so a
    /// source that blocks indefinitely without yielding data delays this
    /// call for just as long. The only reportable failure is a panicked
    /// scanner thread.
    pub fn close(&self) -> Result<(), CloseError> {
        self.inner.stopped.store(true, Ordering::Release);
        let handle = self.inner.scanner.lock().unwrap().take();
        if let Some(handle) = handle {
            handle.join().map_err(|_| CloseError::ScannerPanicked)?;
        }
        Ok(())
    }
}

impl LineBufferState {
    fn append(&mut self, batch: Vec<String>) -> usize {
        if batch.len() >= self.capacity {
            // Full overwrite: only the tail of the batch survives.
            let discarded = self.lines.len() + batch.len() - self.capacity;
            let keep_from = batch.len() - self.capacity;
            self.lines.clear();
            self.lines.extend(batch.into_iter().skip(keep_from));
            discarded
        } else {
            let overflow = (self.lines.len() + batch.len()).saturating_sub(self.capacity);
            for _ in 0..overflow {
                self.lines.pop_front();
            }
            self.lines.extend(batch);
            overflow
        }
    }
}
