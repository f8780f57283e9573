//! Graceful shutdown coordination.
//!
//! One controller per process. The HTTP server awaits [`ShutdownController::wait`]
//! as its graceful-shutdown future; the daemon triggers it from an OS signal
//! or a plugin teardown.

use std::sync::Arc;

use tokio::signal;
use tokio::sync::watch;

/// Broadcasts a one-shot stop signal to any number of waiters.
///
/// Backed by a `watch` channel so waiters that subscribe after the signal
/// still observe it.
#[derive(Clone)]
pub struct ShutdownController {
    tx: Arc<watch::Sender<bool>>,
}

impl ShutdownController {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Trigger shutdown. Idempotent.
    pub fn shutdown(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_shutdown(&self) -> bool {
        *self.tx.borrow()
    }

    /// Resolve once shutdown has been triggered.
    pub fn wait(&self) -> impl std::future::Future<Output = ()> + Send + 'static {
        let mut rx = self.tx.subscribe();
        async move {
            // Err means every controller was dropped; nothing is left to stop.
            let _ = rx.wait_for(|stopped| *stopped).await;
        }
    }

    /// Wait for SIGINT or SIGTERM, then trigger shutdown.
    pub async fn wait_for_signal(&self) {
        let ctrl_c = async {
            if let Err(e) = signal::ctrl_c().await {
                tracing::warn!(error = %e, "failed to listen for SIGINT");
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match signal::unix::signal(signal::unix::SignalKind::terminate()) {
                Ok(mut sigterm) => {
                    sigterm.recv().await;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to install SIGTERM handler");
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        let stopped = self.wait();

        tokio::select! {
            _ = ctrl_c => { tracing::info!("received SIGINT, shutting down"); }
            _ = terminate => { tracing::info!("received SIGTERM, shutting down"); }
            _ = stopped => { return; }
        }

        self.shutdown();
    }
}

impl Default for ShutdownController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn programmatic_shutdown_wakes_waiter() {
        let controller = ShutdownController::new();
        let waiter = tokio::spawn(controller.wait());
        controller.shutdown();
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should finish")
            .unwrap();
        assert!(controller.is_shutdown());
    }

    #[tokio::test]
    async fn late_waiter_sees_earlier_shutdown() {
        let controller = ShutdownController::new();
        controller.shutdown();
        tokio::time::timeout(Duration::from_secs(1), controller.wait())
            .await
            .expect("already shut down");
    }

    #[tokio::test]
    async fn clones_share_the_signal() {
        let controller = ShutdownController::new();
        let clone = controller.clone();
        let waiter = tokio::spawn(controller.wait());
        clone.shutdown();
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should finish")
            .unwrap();
    }

    #[tokio::test]
    async fn signal_wait_returns_on_programmatic_shutdown() {
        let controller = ShutdownController::new();
        controller.shutdown();
        tokio::time::timeout(Duration::from_secs(1), controller.wait_for_signal())
            .await
            .expect("signal wait should end once shut down");
    }
}
