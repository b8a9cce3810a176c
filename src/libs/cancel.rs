//! Cooperative cancellation for in-flight list requests.
//!
//! Every request a list controller issues carries its own [`CancelToken`].
//! Issuing a newer request cancels the previous token; transports either poll
//! [`CancelToken::is_cancelled`] or wrap their I/O in [`CancelToken::guard`],
//! which resolves to [`PlaydeskError::Cancelled`] as soon as the token fires.

use crate::libs::error::{PlaydeskError, Result};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

#[derive(Debug, Default)]
struct Inner {
    cancelled: AtomicBool,
    notify: Notify,
}

/// Shared cancellation flag; clones observe the same state.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    inner: Arc<Inner>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the token cancelled and wakes anyone waiting on it. Idempotent.
    pub fn cancel(&self) {
        if !self.inner.cancelled.swap(true, Ordering::SeqCst) {
            self.inner.notify.notify_waiters();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }

    /// Completes once the token is cancelled.
    pub async fn cancelled(&self) {
        loop {
            // Registered on creation, so a cancel between here and the check
            // below still wakes it.
            let notified = self.inner.notify.notified();
            if self.is_cancelled() {
                return;
            }
            notified.await;
        }
    }

    /// Runs `fut` unless the token fires first.
    pub async fn guard<F: Future>(&self, fut: F) -> Result<F::Output> {
        if self.is_cancelled() {
            return Err(PlaydeskError::Cancelled);
        }
        tokio::select! {
            biased;
            _ = self.cancelled() => Err(PlaydeskError::Cancelled),
            output = fut => Ok(output),
        }
    }
}
