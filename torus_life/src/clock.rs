// clock.rs - Fixed-period driver for successive generations

use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Work the clock performs once per period.
///
/// Each `arm` hands out a fresh epoch. `tick` receives the epoch of the run that
/// scheduled it and must do nothing unless that epoch is still current, checked
/// under the same lock that guards the state it mutates. That check is what
/// makes `disarm` final: a tick already waiting on the lock finds a newer epoch.
pub trait Ticker: Send + Sync + 'static {
    /// Invalidates all earlier runs and returns the epoch of the new one.
    fn arm(&self) -> u64;
    /// Invalidates the current run.
    fn disarm(&self);
    fn tick(&self, epoch: u64) -> ControlFlow<()>;
}

pub struct SimulationClock {
    period: Duration,
    runtime: Handle,
    ticker: Arc<dyn Ticker>,
    task: Option<JoinHandle<()>>,
}

impl SimulationClock {
    pub fn new(period: Duration, runtime: Handle, ticker: Arc<dyn Ticker>) -> Self {
        Self {
            period,
            runtime,
            ticker,
            task: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Starts firing every `period`, first tick one period from now.
    /// A run already in progress is cancelled first.
    pub fn start(&mut self) {
        self.stop();

        let epoch = self.ticker.arm();
        let ticker = Arc::clone(&self.ticker);
        let period = self.period;

        self.task = Some(self.runtime.spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            // One tick at a time; a late tick pushes the schedule back instead of bursting
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if ticker.tick(epoch).is_break() {
                    break;
                }
            }
            log::debug!("clock run {epoch} finished");
        }));
        log::debug!("clock run {epoch} scheduled every {period:?}");
    }

    /// Cancels the current run. Safe to call when nothing is running.
    pub fn stop(&mut self) {
        self.ticker.disarm();
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// True while a run's task is alive. A run can end on its own when its ticker breaks.
    pub fn is_scheduled(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for SimulationClock {
    fn drop(&mut self) {
        self.stop();
    }
}
