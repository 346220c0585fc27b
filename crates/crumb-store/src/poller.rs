//! Background refresh on a fixed interval.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// A background task that runs a refresh closure on a fixed period until
/// dropped. Tick failures are logged and do not stop the loop.
#[derive(Debug)]
pub struct Poller {
    handle: JoinHandle<()>,
}

impl Poller {
    /// Spawn a poller. The first tick fires after one full period, not
    /// immediately; callers do their initial fetch themselves.
    pub fn spawn<F, Fut, E>(name: &'static str, period: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), E>> + Send,
        E: Display,
    {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // Consume the immediate first tick
            interval.tick().await;
            loop {
                interval.tick().await;
                if let Err(error) = tick().await {
                    tracing::debug!(poller = name, %error, "refresh tick failed");
                }
            }
        });
        Self { handle }
    }

    /// Stop the loop now instead of waiting for drop.
    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
