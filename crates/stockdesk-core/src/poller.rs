//! Periodic refresh loop for portfolio data.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Portfolio tables refresh every 30 seconds.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Spawns refresh loops on the Tokio runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct RefreshPoller;

impl RefreshPoller {
    /// Runs `refresh` every `interval`, starting one interval from now.
    ///
    /// A failed refresh is logged and the loop keeps going. A slow refresh
    /// delays later ticks rather than bursting to catch up.
    pub fn spawn<F, Fut, E>(interval: Duration, mut refresh: F) -> PollerHandle
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), E>> + Send + 'static,
        E: Display + Send + 'static,
    {
        let period = interval.max(MIN_INTERVAL);
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            let mut refreshes = 0_u64;
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    _ = ticker.tick() => {
                        refreshes += 1;
                        if let Err(error) = refresh().await {
                            tracing::warn!(refreshes, error = %error, "portfolio refresh failed");
                        }
                    }
                }
            }
            refreshes
        });

        PollerHandle {
            shutdown: Some(shutdown_tx),
            task: Some(task),
        }
    }
}

/// Owner of a running refresh loop. Dropping it aborts the loop.
#[derive(Debug)]
pub struct PollerHandle {
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<u64>>,
}

impl PollerHandle {
    /// Stops the loop after any in-flight refresh completes and returns how
    /// many refreshes ran.
    pub async fn stop(mut self) -> u64 {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        match self.task.take() {
            Some(task) => task.await.unwrap_or(0),
            None => 0,
        }
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
