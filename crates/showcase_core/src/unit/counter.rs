//! Counter/clock state unit.
//!
//! # Responsibility
//! - Own a non-negative counter with increment/decrement/reset transitions.
//! - Own the recurring timestamp refresh and its cancellation handle.
//!
//! # Invariants
//! - `doubled() == 2 * count()` at every observation; it is never stored.
//! - Decrement at zero is a floor, not an error.
//! - `count()` never exceeds `MAX_COUNT`, so `doubled()` cannot overflow.
//! - At most one ticker task exists per unit, and only while `Active`.
//! - After `deactivate()` returns, the timestamp never changes again.
//! - Dropping the unit aborts a still-running ticker.

use crate::unit::clock::{Clock, SystemClock};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Period of the timestamp refresh.
pub const TICK_PERIOD: Duration = Duration::from_millis(1000);

/// Ceiling for `count()`; increment at the ceiling is a no-op.
pub const MAX_COUNT: u64 = u64::MAX / 2;

/// Lifecycle phase of the counter unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitPhase {
    /// Before activation or after deactivation; no ticker is running.
    Inactive,
    /// Ticker running.
    Active,
}

/// Rejected lifecycle transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleError {
    AlreadyActive,
    /// The unit was deactivated; activation happens once per unit.
    AlreadyRetired,
    /// `activate()` was called outside a tokio runtime.
    NoRuntime,
}

impl Display for LifecycleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyActive => write!(f, "counter unit is already active"),
            Self::AlreadyRetired => {
                write!(f, "counter unit was deactivated and cannot be reactivated")
            }
            Self::NoRuntime => write!(f, "counter unit must be activated inside a tokio runtime"),
        }
    }
}

impl Error for LifecycleError {}

/// Observation of all counter values at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSnapshot {
    pub count: u64,
    pub doubled: u64,
    pub timestamp: String,
}

/// Counter plus periodically refreshed timestamp.
pub struct CounterUnit {
    count: u64,
    clock: Arc<dyn Clock>,
    timestamp_rx: watch::Receiver<String>,
    // Held until activation moves it into the ticker task.
    timestamp_tx: Option<watch::Sender<String>>,
    ticker: Option<JoinHandle<()>>,
}

impl CounterUnit {
    /// Creates an inactive unit reading the local wall clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an inactive unit reading time from `clock`.
    ///
    /// The initial timestamp is taken immediately.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        let (timestamp_tx, timestamp_rx) = watch::channel(clock.time_of_day());
        Self {
            count: 0,
            clock,
            timestamp_rx,
            timestamp_tx: Some(timestamp_tx),
            ticker: None,
        }
    }

    pub fn increment(&mut self) {
        if self.count >= MAX_COUNT {
            debug!("event=counter_increment module=counter status=skipped reason=ceiling");
            return;
        }
        self.count += 1;
        debug!(
            "event=counter_increment module=counter status=ok count={}",
            self.count
        );
    }

    pub fn decrement(&mut self) {
        if self.count == 0 {
            debug!("event=counter_decrement module=counter status=skipped reason=floor");
            return;
        }
        self.count -= 1;
        debug!(
            "event=counter_decrement module=counter status=ok count={}",
            self.count
        );
    }

    /// Zeroes the counter. The timestamp is untouched.
    pub fn reset(&mut self) {
        self.count = 0;
        debug!("event=counter_reset module=counter status=ok");
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn doubled(&self) -> u64 {
        self.count * 2
    }

    pub fn timestamp(&self) -> String {
        self.timestamp_rx.borrow().clone()
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            count: self.count(),
            doubled: self.doubled(),
            timestamp: self.timestamp(),
        }
    }

    pub fn phase(&self) -> UnitPhase {
        if self.ticker.is_some() {
            UnitPhase::Active
        } else {
            UnitPhase::Inactive
        }
    }

    /// Starts the recurring timestamp refresh.
    ///
    /// The first refresh lands one full `TICK_PERIOD` after this call.
    ///
    /// # Errors
    /// - `AlreadyActive` when a ticker is already running.
    /// - `AlreadyRetired` when the unit has been deactivated before.
    /// - `NoRuntime` when called outside a tokio runtime.
    pub fn activate(&mut self) -> Result<(), LifecycleError> {
        if self.ticker.is_some() {
            return Err(LifecycleError::AlreadyActive);
        }
        let runtime = Handle::try_current().map_err(|_| LifecycleError::NoRuntime)?;
        let Some(timestamp_tx) = self.timestamp_tx.take() else {
            return Err(LifecycleError::AlreadyRetired);
        };

        let first_tick = Instant::now() + TICK_PERIOD;
        let clock = Arc::clone(&self.clock);
        self.ticker = Some(runtime.spawn(run_ticker(timestamp_tx, clock, first_tick)));
        info!(
            "event=counter_activate module=counter status=ok period_ms={}",
            TICK_PERIOD.as_millis()
        );
        Ok(())
    }

    /// Stops the ticker and waits for it to finish.
    ///
    /// No-op when the unit is not active.
    pub async fn deactivate(&mut self) {
        let Some(ticker) = self.ticker.take() else {
            return;
        };
        ticker.abort();
        if let Err(err) = ticker.await {
            if err.is_panic() {
                warn!("event=counter_deactivate module=counter status=error reason=ticker_panicked");
                return;
            }
        }
        info!("event=counter_deactivate module=counter status=ok");
    }

    /// Waits for the next timestamp refresh.
    ///
    /// Returns `false` immediately when no ticker is running.
    pub async fn refreshed(&mut self) -> bool {
        if self.ticker.is_none() {
            return false;
        }
        self.timestamp_rx.changed().await.is_ok()
    }
}

impl Default for CounterUnit {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CounterUnit {
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
            debug!("event=counter_drop module=counter status=ok ticker=aborted");
        }
    }
}

async fn run_ticker(
    timestamp_tx: watch::Sender<String>,
    clock: Arc<dyn Clock>,
    first_tick: Instant,
) {
    let mut interval = time::interval_at(first_tick, TICK_PERIOD);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        interval.tick().await;
        // Fails only once the owning unit (sole receiver) is gone.
        if timestamp_tx.send(clock.time_of_day()).is_err() {
            break;
        }
    }
}
