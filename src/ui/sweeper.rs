//! Periodic inactivity sweeper.
//!
//! Drives [`SweepInactiveUseCase`] on a fixed interval, independent of
//! request traffic. The task is cancellable: [`SweeperHandle::shutdown`]
//! stops the loop and waits for it to finish, so the server can tear the
//! sweeper down explicitly instead of leaving a bare interval running.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::usecase::SweepInactiveUseCase;

/// Time between eviction passes (15 s)
pub const SWEEP_INTERVAL: Duration = Duration::from_millis(15_000);

pub struct InactivitySweeper {
    usecase: Arc<SweepInactiveUseCase>,
    interval: Duration,
}

impl InactivitySweeper {
    pub fn new(usecase: Arc<SweepInactiveUseCase>) -> Self {
        Self::with_interval(usecase, SWEEP_INTERVAL)
    }

    pub fn with_interval(usecase: Arc<SweepInactiveUseCase>, interval: Duration) -> Self {
        Self { usecase, interval }
    }

    /// Start the periodic task.
    pub fn spawn(self) -> SweeperHandle {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // the first tick of a tokio interval completes immediately;
            // consume it so the first pass runs a full interval after startup
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        match self.usecase.execute().await {
                            Ok(report) if !report.is_empty() => {
                                tracing::info!(
                                    "Sweep pass evicted {} participant(s), {} failure(s)",
                                    report.evicted.len(),
                                    report.failed.len()
                                );
                            }
                            Ok(_) => {
                                tracing::debug!("Sweep pass found no stale participants");
                            }
                            Err(err) => {
                                // best-effort cleanup, try again next tick
                                tracing::warn!("Sweep pass failed: {}", err);
                            }
                        }
                    }
                    _ = shutdown_rx.changed() => {
                        tracing::info!("Inactivity sweeper stopped");
                        break;
                    }
                }
            }
        });

        SweeperHandle { shutdown_tx, task }
    }
}

/// Handle for stopping a running sweeper.
pub struct SweeperHandle {
    shutdown_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl SweeperHandle {
    /// Stop the periodic task and wait for it to finish.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(true);
        let _ = self.task.await;
    }
}
