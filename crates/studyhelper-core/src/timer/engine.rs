//! Pomodoro timer state machine.
//!
//! The timer has no thread of its own. The caller invokes `tick()` once per
//! second while it wants time to pass, and never dispatches a new tick before
//! the previous one's event has been handled.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Paused -> Running
//!           |
//!           +-- period ends --> Idle (or Running into an auto-started break)
//! any -> reset -> Idle
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut timer = PomodoroTimer::new(TimerSettings::default());
//! timer.start();
//! // Once per second:
//! if let Some(event) = timer.tick() { /* period finished */ }
//! ```

use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::period::{Period, TimerSettings};
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    Paused,
}

/// Work/break countdown.
#[derive(Debug, Clone)]
pub struct PomodoroTimer {
    settings: TimerSettings,
    state: TimerState,
    period: Period,
    /// Seconds left in the current period.
    remaining_secs: u64,
}

impl PomodoroTimer {
    /// Create an idle timer at the start of a work period.
    pub fn new(settings: TimerSettings) -> Self {
        Self {
            remaining_secs: settings.secs_for(Period::Work),
            settings,
            state: TimerState::Idle,
            period: Period::Work,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn remaining(&self) -> Duration {
        Duration::from_secs(self.remaining_secs)
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn settings(&self) -> &TimerSettings {
        &self.settings
    }

    /// Configured length of the current period.
    pub fn total_secs(&self) -> u64 {
        self.settings.secs_for(self.period)
    }

    /// 0.0 .. 1.0 progress within the current period.
    pub fn progress(&self) -> f64 {
        let total = self.total_secs();
        if total == 0 {
            return 0.0;
        }
        (1.0 - self.remaining_secs as f64 / total as f64).clamp(0.0, 1.0)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            state: self.state,
            period: self.period,
            remaining_secs: self.remaining_secs,
            total_secs: self.total_secs(),
            progress: self.progress(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Running => None,
            TimerState::Idle | TimerState::Paused => {
                if self.remaining_secs == 0 {
                    self.remaining_secs = self.total_secs();
                }
                self.state = TimerState::Running;
                info!("{} period started, {}s remaining", self.period, self.remaining_secs);
                Some(Event::TimerStarted {
                    period: self.period,
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
        }
    }

    pub fn pause(&mut self) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        self.state = TimerState::Paused;
        info!("Timer paused with {}s remaining", self.remaining_secs);
        Some(Event::TimerPaused {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn reset(&mut self) -> Option<Event> {
        self.state = TimerState::Idle;
        self.period = Period::Work;
        self.remaining_secs = self.settings.secs_for(Period::Work);
        info!("Timer reset");
        Some(Event::TimerReset { at: Utc::now() })
    }

    /// Advance one second. Returns `Some(Event::PeriodCompleted)` when the
    /// current period runs out; a no-op unless running.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            return None;
        }

        let finished = self.period;
        self.period = finished.flip();
        self.remaining_secs = self.total_secs();
        self.state = if self.period == Period::Break && self.settings.auto_start_break {
            TimerState::Running
        } else {
            TimerState::Idle
        };
        info!(
            "{finished} period completed; {} is {:?}",
            self.period, self.state
        );
        Some(Event::PeriodCompleted {
            period: finished,
            at: Utc::now(),
        })
    }

    pub fn set_work_duration(&mut self, duration: Duration) {
        self.set_duration(Period::Work, duration);
    }

    pub fn set_break_duration(&mut self, duration: Duration) {
        self.set_duration(Period::Break, duration);
    }

    pub fn set_auto_start_break(&mut self, enabled: bool) {
        self.settings.auto_start_break = enabled;
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Store the new length; apply it to the countdown only when stopped
    /// and the length belongs to the current period.
    fn set_duration(&mut self, period: Period, duration: Duration) {
        let secs = duration.as_secs();
        self.settings.set_secs_for(period, secs);
        if self.state != TimerState::Running && self.period == period {
            self.remaining_secs = secs;
        }
        debug!("{period} duration set to {secs}s");
    }
}

impl Default for PomodoroTimer {
    fn default() -> Self {
        Self::new(TimerSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_and_five(auto: bool) -> PomodoroTimer {
        PomodoroTimer::new(TimerSettings::from_minutes(1, 5, auto))
    }

    fn tick_n(timer: &mut PomodoroTimer, n: usize) -> Vec<Event> {
        (0..n).filter_map(|_| timer.tick()).collect()
    }

    #[test]
    fn start_pause_start() {
        let mut timer = PomodoroTimer::default();
        assert_eq!(timer.state(), TimerState::Idle);

        assert!(timer.start().is_some());
        assert_eq!(timer.state(), TimerState::Running);
        assert!(timer.start().is_none());

        timer.tick();
        assert!(timer.pause().is_some());
        assert_eq!(timer.state(), TimerState::Paused);
        assert_eq!(timer.remaining_secs(), 25 * 60 - 1);
        assert!(timer.pause().is_none());

        assert!(timer.start().is_some());
        assert_eq!(timer.remaining_secs(), 25 * 60 - 1);
    }

    #[test]
    fn tick_is_noop_unless_running() {
        let mut timer = one_and_five(false);
        assert!(timer.tick().is_none());
        assert_eq!(timer.remaining_secs(), 60);

        timer.start();
        timer.tick();
        timer.pause();
        assert!(timer.tick().is_none());
        assert_eq!(timer.remaining_secs(), 59);
    }

    #[test]
    fn work_period_completes_into_idle_break() {
        let mut timer = one_and_five(false);
        timer.start();

        let events = tick_n(&mut timer, 59);
        assert!(events.is_empty());
        assert_eq!(timer.remaining_secs(), 1);

        let done = timer.tick().expect("period should complete");
        assert_eq!(done.completed_period(), Some(Period::Work));
        assert_eq!(timer.period(), Period::Break);
        assert_eq!(timer.remaining(), Duration::from_secs(300));
        assert_eq!(timer.state(), TimerState::Idle);
    }

    #[test]
    fn auto_start_break_keeps_running() {
        let mut timer = one_and_five(true);
        timer.start();
        let events = tick_n(&mut timer, 60);
        assert_eq!(events.len(), 1);
        assert_eq!(timer.state(), TimerState::Running);
        assert_eq!(timer.period(), Period::Break);
        assert_eq!(timer.remaining_secs(), 300);
    }

    #[test]
    fn break_completion_never_auto_starts_work() {
        let mut timer = one_and_five(true);
        timer.start();
        tick_n(&mut timer, 60);
        let events = tick_n(&mut timer, 300);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].completed_period(), Some(Period::Break));
        assert_eq!(timer.period(), Period::Work);
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.remaining_secs(), 60);
    }

    #[test]
    fn reset_returns_to_idle_work() {
        let mut timer = one_and_five(true);
        timer.start();
        tick_n(&mut timer, 70);
        assert_eq!(timer.period(), Period::Break);

        assert!(timer.reset().is_some());
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.period(), Period::Work);
        assert_eq!(timer.remaining_secs(), 60);
    }

    #[test]
    fn duration_change_applies_when_stopped() {
        let mut timer = one_and_five(false);
        timer.set_work_duration(Duration::from_secs(90));
        assert_eq!(timer.remaining_secs(), 90);

        // Break length does not touch a work countdown.
        timer.set_break_duration(Duration::from_secs(120));
        assert_eq!(timer.remaining_secs(), 90);
        assert_eq!(timer.settings().brk(), Duration::from_secs(120));
    }

    #[test]
    fn duration_change_applies_when_paused() {
        let mut timer = one_and_five(false);
        timer.start();
        timer.tick();
        timer.pause();
        timer.set_work_duration(Duration::from_secs(30));
        assert_eq!(timer.remaining_secs(), 30);
    }

    #[test]
    fn duration_change_is_deferred_while_running() {
        let mut timer = one_and_five(false);
        timer.start();
        timer.tick();
        timer.set_work_duration(Duration::from_secs(10));
        assert_eq!(timer.remaining_secs(), 59);
        assert_eq!(timer.settings().work(), Duration::from_secs(10));

        timer.reset();
        assert_eq!(timer.remaining_secs(), 10);
    }

    #[test]
    fn start_from_zero_reloads_period_length() {
        let mut timer = one_and_five(false);
        timer.set_work_duration(Duration::ZERO);
        assert_eq!(timer.remaining_secs(), 0);

        timer.start();
        // Deferred while running, so the countdown is still at zero.
        timer.set_work_duration(Duration::from_secs(45));
        timer.pause();
        assert_eq!(timer.remaining_secs(), 0);

        timer.start();
        assert_eq!(timer.remaining_secs(), 45);
        assert!(timer.is_running());
    }

    #[test]
    fn zero_length_period_completes_on_first_tick() {
        let mut timer = PomodoroTimer::new(TimerSettings::new(
            Duration::ZERO,
            Duration::from_secs(5),
            false,
        ));
        timer.start();
        let done = timer.tick();
        assert_eq!(done.and_then(|e| e.completed_period()), Some(Period::Work));
        assert_eq!(timer.period(), Period::Break);
    }

    #[test]
    fn snapshot_reports_progress() {
        let mut timer = one_and_five(false);
        timer.start();
        tick_n(&mut timer, 30);
        match timer.snapshot() {
            Event::StateSnapshot {
                state,
                period,
                remaining_secs,
                total_secs,
                progress,
                ..
            } => {
                assert_eq!(state, TimerState::Running);
                assert_eq!(period, Period::Work);
                assert_eq!(remaining_secs, 30);
                assert_eq!(total_secs, 60);
                assert!((progress - 0.5).abs() < f64::EPSILON);
            }
            _ => panic!("Expected StateSnapshot"),
        }
    }
}
