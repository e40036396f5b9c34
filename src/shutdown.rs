use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Cloneable stop signal shared by the demo's feature tasks.
#[derive(Clone, Default)]
pub struct ShutdownHandle {
    shutdown: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    /// Signal shutdown; later calls are no-ops.
    pub fn signal(&self) {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            tracing::info!("Shutdown requested");
            self.notify.notify_waiters();
        }
    }

    pub async fn wait(&self) {
        // Register with Notify before checking the flag so a signal()
        // between the check and the await is not lost.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_shutting_down() {
            return;
        }
        notified.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn wait_returns_after_signal() {
        let handle = ShutdownHandle::new();
        let waiter = handle.clone();
        let task = tokio::spawn(async move { waiter.wait().await });
        tokio::task::yield_now().await;
        handle.signal();
        tokio::time::timeout(Duration::from_secs(1), task)
            .await
            .expect("wait should finish")
            .expect("task should not panic");
    }

    #[tokio::test]
    async fn wait_after_signal_returns_immediately() {
        let handle = ShutdownHandle::new();
        handle.signal();
        handle.signal();
        assert!(handle.is_shutting_down());
        tokio::time::timeout(Duration::from_millis(100), handle.wait())
            .await
            .expect("already signalled");
    }
}
