use std::sync::Arc;

use tokio::sync::watch;

/// Fire-once cancellation flag shared by the sweep loop and every request task.
///
/// Once triggered it stays triggered; observers that subscribe late still see it.
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    tx: Arc<watch::Sender<bool>>,
}

impl ShutdownSignal {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Fires the signal. Returns `true` only for the call that flipped it.
    pub fn trigger(&self) -> bool {
        !self.tx.send_replace(true)
    }

    #[must_use]
    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }

    /// Resolves once the signal has fired.
    pub async fn triggered(&self) {
        let mut rx = self.tx.subscribe();
        if rx.wait_for(|fired| *fired).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}
