use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Work,
    Break,
}

impl Period {
    /// The period that follows this one.
    pub fn flip(self) -> Self {
        match self {
            Period::Work => Period::Break,
            Period::Break => Period::Work,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Work => f.write_str("Work"),
            Period::Break => f.write_str("Break"),
        }
    }
}

/// Durations and auto-start flag supplied by the caller.
///
/// Durations are kept in whole seconds, the timer's tick unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSettings {
    work_secs: u64,
    break_secs: u64,
    pub auto_start_break: bool,
}

impl TimerSettings {
    pub fn new(work: Duration, brk: Duration, auto_start_break: bool) -> Self {
        Self {
            work_secs: work.as_secs(),
            break_secs: brk.as_secs(),
            auto_start_break,
        }
    }

    /// Convenience constructor from whole minutes.
    pub fn from_minutes(work_min: u64, break_min: u64, auto_start_break: bool) -> Self {
        Self {
            work_secs: work_min.saturating_mul(60),
            break_secs: break_min.saturating_mul(60),
            auto_start_break,
        }
    }

    pub fn work(&self) -> Duration {
        Duration::from_secs(self.work_secs)
    }

    pub fn brk(&self) -> Duration {
        Duration::from_secs(self.break_secs)
    }

    /// Configured length of `period` in seconds.
    pub fn secs_for(&self, period: Period) -> u64 {
        match period {
            Period::Work => self.work_secs,
            Period::Break => self.break_secs,
        }
    }

    pub(crate) fn set_secs_for(&mut self, period: Period, secs: u64) {
        match period {
            Period::Work => self.work_secs = secs,
            Period::Break => self.break_secs = secs,
        }
    }
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self::from_minutes(25, 5, false)
    }
}
