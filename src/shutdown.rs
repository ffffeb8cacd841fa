// src/shutdown.rs
use std::future::Future;
use std::io;

use tokio::sync::oneshot;

/// Start listening for `signal` now, on its own task, and return a future that
/// resolves once it fired. If the listener fails the future never resolves.
pub fn listen<S>(signal: S) -> impl Future<Output = ()>
where
    S: Future<Output = io::Result<()>> + Send + 'static,
{
    let (tx, rx) = oneshot::channel::<()>();
    tokio::spawn(async move {
        match signal.await {
            Ok(()) => {
                tracing::debug!("shutdown signal received");
                let _ = tx.send(());
            }
            Err(e) => {
                tracing::error!(error = %e, "cannot listen for shutdown signal");
                // Keep the sender alive so the receiver stays pending.
                std::future::pending::<()>().await;
                drop(tx);
            }
        }
    });
    async move {
        if rx.await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

/// Ctrl-C listener registered before the first poll cycle starts.
pub fn ctrl_c() -> impl Future<Output = ()> {
    listen(tokio::signal::ctrl_c())
}
