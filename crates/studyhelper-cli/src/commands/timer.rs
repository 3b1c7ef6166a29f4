//! Live pomodoro timer.

use std::io::{self, BufRead};
use std::thread;
use std::time::Duration;

use clap::Subcommand;
use studyhelper_core::{Event, PomodoroTimer};
use tracing::info;

use crate::context::Context;

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run the timer in the foreground, printing events as JSON lines
    Run {
        /// Work period length (e.g. 25m, 1h30m, 90s; bare numbers are minutes)
        #[arg(long, value_parser = parse_duration)]
        work: Option<Duration>,
        /// Break period length
        #[arg(long = "break", value_parser = parse_duration)]
        brk: Option<Duration>,
        /// Start each break as soon as its work period ends
        /// (`--auto-start-break=false` overrides the config for this run)
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        auto_start_break: Option<bool>,
        /// Stop after this many completed periods
        #[arg(long, default_value_t = 2)]
        cycles: u32,
        /// Milliseconds per tick
        #[arg(long, default_value_t = 1000, hide = true)]
        tick_ms: u64,
    },
}

/// Parse `1h30m`, `25m`, `90s` or a bare number of minutes.
fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim().to_lowercase();
    if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
        let minutes: u64 = s.parse().map_err(|_| format!("duration too large: {s}"))?;
        let secs = minutes
            .checked_mul(60)
            .ok_or_else(|| format!("duration too large: {s}"))?;
        return Ok(Duration::from_secs(secs));
    }

    let mut total_secs = 0u64;
    let mut current = String::new();
    let mut saw_unit = false;
    for ch in s.chars() {
        let scale = match ch {
            '0'..='9' => {
                current.push(ch);
                continue;
            }
            'h' => 3600,
            'm' => 60,
            's' => 1,
            _ => return Err(format!("invalid duration: {s} (use 25m, 1h30m, 90s)")),
        };
        if current.is_empty() {
            return Err(format!("missing number before '{ch}' in {s}"));
        }
        let n: u64 = current
            .parse()
            .map_err(|_| format!("duration too large: {s}"))?;
        total_secs = n
            .checked_mul(scale)
            .and_then(|secs| total_secs.checked_add(secs))
            .ok_or_else(|| format!("duration too large: {s}"))?;
        current.clear();
        saw_unit = true;
    }

    if saw_unit && current.is_empty() {
        Ok(Duration::from_secs(total_secs))
    } else {
        Err(format!("invalid duration: {s} (use 25m, 1h30m, 90s)"))
    }
}

fn emit(event: Option<Event>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(event) = event {
        println!("{}", serde_json::to_string(&event)?);
    }
    Ok(())
}

pub fn run(action: TimerAction, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TimerAction::Run {
            work,
            brk,
            auto_start_break,
            cycles,
            tick_ms,
        } => {
            let mut timer = PomodoroTimer::new(ctx.config.timer_settings());
            if let Some(d) = work {
                timer.set_work_duration(d);
            }
            if let Some(d) = brk {
                timer.set_break_duration(d);
            }
            if let Some(enabled) = auto_start_break {
                timer.set_auto_start_break(enabled);
            }

            let tick = Duration::from_millis(tick_ms);
            let stdin = io::stdin();
            let mut lines = stdin.lock().lines();
            let mut completed = 0;

            emit(timer.start())?;
            while completed < cycles {
                thread::sleep(tick);
                let Some(event) = timer.tick() else {
                    continue;
                };
                if let Some(period) = event.completed_period() {
                    info!("{period} period completed");
                }
                emit(Some(event))?;
                completed += 1;

                if completed < cycles && !timer.is_running() {
                    eprintln!("{} period ready. Press Enter to start.", timer.period());
                    match lines.next() {
                        Some(line) => {
                            line?;
                        }
                        None => break,
                    }
                    emit(timer.start())?;
                }
            }
            emit(Some(timer.snapshot()))?;
        }
    }
    Ok(())
}
