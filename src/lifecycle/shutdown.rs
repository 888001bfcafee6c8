//! Shutdown coordination for the gateway.

use tokio::sync::broadcast;

/// Broadcasts a single stop notice to the HTTP server and the signal task.
pub struct Shutdown {
    notice: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (notice, _) = broadcast::channel(1);
        Self { notice }
    }

    /// A receiver that resolves once [`Shutdown::trigger`] is called.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.notice.subscribe()
    }

    /// Notify every subscriber.
    ///
    /// Returns how many subscribers were notified; zero when the server has
    /// already stopped.
    pub fn trigger(&self) -> usize {
        let notified = self.notice.send(()).unwrap_or(0);
        tracing::debug!(subscribers = notified, "Shutdown triggered");
        notified
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
