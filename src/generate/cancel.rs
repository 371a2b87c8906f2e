//! Cooperative cancellation for in-flight generation calls.
//!
//! The consumer checks the token at every fragment boundary; cancelling from
//! another task aborts the stream there, so no state update escapes after
//! logical abandonment.

use tokio::sync::watch;

/// Create a connected handle/token pair for one generation attempt.
pub fn cancel_pair() -> (CancelHandle, CancelToken) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, CancelToken { rx })
}

/// Cancelling side. Held by whoever owns the attempt (the CLI wires Ctrl-C
/// to it).
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

/// Observing side, threaded through the streaming call.
#[derive(Debug, Clone)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    /// A token that can never be cancelled, for callers without a handle.
    pub fn noop() -> Self {
        let (tx, rx) = watch::channel(false);
        // Keep the sender alive forever so the token stays pending.
        std::mem::forget(tx);
        Self { rx }
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once the handle cancels. Pends forever if the handle is
    /// dropped without cancelling.
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        if *rx.borrow_and_update() {
            return;
        }
        loop {
            if rx.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
            if *rx.borrow_and_update() {
                return;
            }
        }
    }
}
