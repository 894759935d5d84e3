use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::info;

use crate::domain::{Clock, DailySchedule};

/// Work executed on every scheduled fire.
///
/// Implementations handle their own failures; the scheduler only sequences runs.
#[async_trait]
pub trait ScheduledJob: Send + Sync {
    fn name(&self) -> &str;

    async fn run(&self);
}

/// Runs a single job once per day until told to stop
pub struct DailyScheduler {
    schedule: DailySchedule,
    clock: Arc<dyn Clock>,
    job: Arc<dyn ScheduledJob>,
}

impl DailyScheduler {
    pub fn new(schedule: DailySchedule, clock: Arc<dyn Clock>, job: Arc<dyn ScheduledJob>) -> Self {
        Self {
            schedule,
            clock,
            job,
        }
    }

    /// Spawn the scheduler loop on the current runtime.
    ///
    /// Sending `true` through the returned sender (or dropping it) stops the
    /// loop after any in-flight run completes.
    pub fn spawn(self) -> (watch::Sender<bool>, JoinHandle<()>) {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = tokio::spawn(self.run(shutdown_rx));

        (shutdown_tx, handle)
    }

    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        let job_name = self.job.name().to_string();
        let mut last_fire = self.clock.now();

        info!(
            job_name = %job_name,
            at = %self.schedule.time_of_day(),
            "Scheduler started"
        );

        loop {
            if *shutdown.borrow() {
                break;
            }

            let now = self.clock.now();
            let fire_at = self.schedule.next_after(&now.max(last_fire));
            let delay = (fire_at - now).to_std().unwrap_or(Duration::ZERO);

            info!(
                job_name = %job_name,
                next_run = %fire_at,
                "Next scheduled run"
            );

            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
                _ = tokio::time::sleep(delay) => {
                    self.job.run().await;
                    last_fire = fire_at;
                }
            }
        }

        info!(job_name = %job_name, "Scheduler stopped");
    }
}
