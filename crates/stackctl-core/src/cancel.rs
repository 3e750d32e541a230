//! Process-wide cancellation signal
//!
//! A `CancellationScope` is created once per invocation and threaded into the
//! engine call. It moves from not-cancelled to cancelled at most once; every
//! clone observes the same state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;
use tracing::debug;

#[derive(Debug, Default)]
struct Inner {
    cancelled: AtomicBool,
    notify: Notify,
}

/// Shared cancellation signal
#[derive(Debug, Clone, Default)]
pub struct CancellationScope {
    inner: Arc<Inner>,
}

impl CancellationScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Returns `true` only for the call that performed
    /// the transition.
    pub fn cancel(&self) -> bool {
        if self.inner.cancelled.swap(true, Ordering::SeqCst) {
            return false;
        }
        debug!("cancellation scope transitioned to cancelled");
        self.inner.notify.notify_waiters();
        true
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }

    /// Resolves once the scope is cancelled
    pub async fn cancelled(&self) {
        loop {
            // Register before checking so a concurrent cancel() is not missed.
            let notified = self.inner.notify.notified();
            if self.is_cancelled() {
                return;
            }
            notified.await;
        }
    }
}
