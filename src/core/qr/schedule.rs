use super::refresher::QrRefresher;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval, sleep};
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshSchedule {
    pub initial_delay: Duration,
    pub period: Duration,
}

impl Default for RefreshSchedule {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_secs(1),
            period: Duration::from_secs(60),
        }
    }
}

/// Never returns. First cycle after `initial_delay`, then one per `period`.
/// A failed cycle is logged and retried on the next tick.
pub async fn run_refresh_loop(refresher: Arc<QrRefresher>, schedule: RefreshSchedule) {
    sleep(schedule.initial_delay).await;

    let mut ticker = interval(schedule.period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(period_secs = schedule.period.as_secs(), "QR refresh loop started");

    loop {
        // The first tick completes immediately.
        ticker.tick().await;

        let worker = Arc::clone(&refresher);
        match tokio::task::spawn_blocking(move || worker.run_cycle()).await {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => error!(error = %e, "QR refresh cycle failed"),
            Err(e) => error!(error = %e, "QR refresh task panicked"),
        }
    }
}
