//! Coalesced update notification.

use crossbeam_channel::{Receiver, Sender, TrySendError, bounded};

/// A single-slot, edge-triggered notification.
///
/// At most one event is ever pending: rapid successive signals collapse into
/// a single wake-up, and signaling never blocks the caller. The guarantee is
/// at-least-once delivery — after any signal the consumer has not yet
/// received, exactly one notification is pending.
pub(crate) struct UpdateSignal {
    tx: Sender<()>,
    rx: Receiver<()>,
}

impl UpdateSignal {
    pub(crate) fn new() -> Self {
        let (tx, rx) = bounded(1);
        UpdateSignal { tx, rx }
    }

    /// Leaves one notification pending. Never blocks.
    pub(crate) fn signal(&self) {
        if let Err(TrySendError::Full(())) = self.tx.try_send(()) {
            // The slot holds a stale notification: drain it and re-send so
            // the pending event always postdates the latest mutation.
            let _ = self.rx.try_recv();
            let _ = self.tx.try_send(());
        }
    }

    /// Returns a receiver observing pending notifications.
    ///
    /// Receivers are cheap clones of the same slot, so a notification is
    /// consumed by whichever receiver takes it first.
    pub(crate) fn subscribe(&self) -> Receiver<()> {
        self.rx.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_coalesces() {
        let signal = UpdateSignal::new();
        let rx = signal.subscribe();

        signal.signal();
        signal.signal();
        signal.signal();

        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_signal_after_receive() {
        let signal = UpdateSignal::new();
        let rx = signal.subscribe();

        signal.signal();
        assert!(rx.try_recv().is_ok());

        signal.signal();
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn test_no_pending_without_signal() {
        let signal = UpdateSignal::new();
        let rx = signal.subscribe();
        assert!(rx.try_recv().is_err());
    }
}
