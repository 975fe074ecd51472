use crate::app::event::AppEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, trace};

/// Spawns and cancels the periodic task that feeds
/// [`AppEvent::CountdownTick`] into the event loop. At most one task runs.
pub struct Ticker {
    period: Duration,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn new(period: Duration, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            period,
            event_tx,
            handle: None,
        }
    }

    /// (Re)start ticking. The first tick arrives one full period from now.
    pub fn start(&mut self, generation: u64) {
        self.stop();
        let period = self.period;
        let tx = self.event_tx.clone();
        debug!(generation, ?period, "ticker started");
        self.handle = Some(tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                trace!(generation, "tick");
                if tx.send(AppEvent::CountdownTick { generation }).is_err() {
                    break;
                }
            }
        }));
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("ticker stopped");
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
