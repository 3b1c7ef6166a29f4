mod engine;
mod period;

pub use engine::{PomodoroTimer, TimerState};
pub use period::{Period, TimerSettings};
