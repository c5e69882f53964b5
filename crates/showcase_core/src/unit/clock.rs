//! Wall-clock source for the counter unit's timestamp.

use chrono::Local;

/// `HH:MM:SS` of the local wall clock.
pub const TIME_OF_DAY_FORMAT: &str = "%H:%M:%S";

/// Produces the formatted time-of-day written on every tick.
pub trait Clock: Send + Sync {
    fn time_of_day(&self) -> String;
}

/// Reads the local wall clock through chrono.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn time_of_day(&self) -> String {
        Local::now().format(TIME_OF_DAY_FORMAT).to_string()
    }
}
