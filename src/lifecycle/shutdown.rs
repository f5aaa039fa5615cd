//! Programmatic stop for the search server.
//!
//! `main` keeps one coordinator alive for the process; the integration
//! harness holds its own and triggers it to stop a server spawned on an
//! ephemeral port. Either way the receiver ends up in
//! [`shutdown_signal`](crate::lifecycle::signals::shutdown_signal), raced
//! against Ctrl+C and SIGTERM, and in-flight searches drain before
//! `HttpServer::run` returns.

use tokio::sync::broadcast;

/// Broadcast handle that stops every server subscribed to it.
///
/// A server must subscribe before `trigger` is called; a receiver created
/// afterwards does not see the earlier stop.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver to pass to `HttpServer::run`.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Ask all subscribed servers to stop accepting and drain.
    pub fn trigger(&self) {
        let servers = self.tx.send(()).unwrap_or(0);
        tracing::info!(servers, "Shutdown triggered");
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_trigger_stops_signal_future() {
        let shutdown = Shutdown::new();
        let waiting = tokio::spawn(crate::lifecycle::signals::shutdown_signal(shutdown.subscribe()));

        shutdown.trigger();
        tokio::time::timeout(Duration::from_secs(1), waiting)
            .await
            .expect("shutdown_signal did not resolve")
            .unwrap();
    }

    #[tokio::test]
    async fn test_late_subscriber_misses_stop() {
        let shutdown = Shutdown::new();
        shutdown.trigger();

        let mut late = shutdown.subscribe();
        assert!(late.try_recv().is_err());
    }

    #[test]
    fn test_trigger_without_servers() {
        Shutdown::default().trigger();
    }
}
