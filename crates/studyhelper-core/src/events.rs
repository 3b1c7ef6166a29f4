use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{Period, TimerState};

/// Every timer state change produces an Event.
/// The presentation layer renders them; nothing inside the core listens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        period: Period,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        at: DateTime<Utc>,
    },
    /// A work or break period ran down to zero.
    PeriodCompleted {
        period: Period,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: TimerState,
        period: Period,
        remaining_secs: u64,
        total_secs: u64,
        progress: f64,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// The period that just finished, if this is a completion event.
    pub fn completed_period(&self) -> Option<Period> {
        match self {
            Event::PeriodCompleted { period, .. } => Some(*period),
            _ => None,
        }
    }
}
