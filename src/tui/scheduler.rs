//! Delayed events bound to a view's lifetime.
//!
//! A view owns one `ViewScheduler`; scheduled events are delivered into the
//! view's own channel and picked up on its next `poll()`. Dropping the
//! scheduler (i.e. unmounting the view) aborts everything still pending.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub struct ViewScheduler<E> {
    tx: mpsc::UnboundedSender<E>,
    pending: Vec<JoinHandle<()>>,
}

impl<E: Send + 'static> ViewScheduler<E> {
    pub fn new(tx: mpsc::UnboundedSender<E>) -> Self {
        Self {
            tx,
            pending: Vec::new(),
        }
    }

    /// Deliver `event` after `delay`. Must be called from within a Tokio runtime.
    pub fn schedule(&mut self, delay: Duration, event: E) {
        self.pending.retain(|handle| !handle.is_finished());

        let tx = self.tx.clone();
        self.pending.push(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(event);
        }));
    }

    /// Abort every event that has not fired yet.
    pub fn cancel_all(&mut self) {
        for handle in self.pending.drain(..) {
            handle.abort();
        }
    }

    /// Number of scheduled events that have not fired yet.
    pub fn pending(&self) -> usize {
        self.pending.iter().filter(|h| !h.is_finished()).count()
    }
}

impl<E> Drop for ViewScheduler<E> {
    fn drop(&mut self) {
        for handle in self.pending.drain(..) {
            handle.abort();
        }
    }
}
