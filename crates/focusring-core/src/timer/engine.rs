//! Timer engine implementation.
//!
//! The engine is a caller-driven state machine. It owns no threads and no
//! tick source: the presenter acquires a 1 Hz ticker on `start()`, calls
//! `tick()` once per elapsed second, and releases the ticker on `pause()`
//! or teardown. Time that passes while no process is alive is charged
//! against the countdown by `restore()`, never by `tick()`.
//!
//! ## Mode cycle
//!
//! ```text
//! Work -> ShortBreak -> Work -> ... -> Work -> LongBreak -> Work -> ...
//! ```
//!
//! Every Nth completed work session ends in the long break instead of the
//! short one.

use chrono::{DateTime, Utc};

use super::durations::{Durations, Mode};
use super::persisted::PersistedTimer;
use crate::events::Event;

/// Core Pomodoro state machine.
#[derive(Debug, Clone)]
pub struct TimerEngine {
    durations: Durations,
    mode: Mode,
    remaining_secs: u32,
    completed_sessions: u32,
    running: bool,
}

impl TimerEngine {
    /// Create a paused engine at the start of a fresh work period.
    pub fn new(durations: Durations) -> Self {
        Self {
            mode: Mode::Work,
            remaining_secs: durations.work_secs,
            completed_sessions: 0,
            running: false,
            durations,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn completed_sessions(&self) -> u32 {
        self.completed_sessions
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn durations(&self) -> &Durations {
        &self.durations
    }

    /// Full length of the period the engine is currently in.
    pub fn total_secs(&self) -> u32 {
        self.durations.for_mode(self.mode)
    }

    /// Fraction of the current period still ahead: 1.0 when fresh, 0.0 at
    /// expiry. This is what the presenter feeds its progress ring.
    pub fn progress_fraction(&self) -> f64 {
        let total = self.total_secs();
        if total == 0 {
            return 0.0;
        }
        self.remaining_secs as f64 / total as f64
    }

    /// Snapshot-style event for the presenter.
    pub fn state_event(&self) -> Event {
        Event::StateSnapshot {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            total_secs: self.total_secs(),
            completed_sessions: self.completed_sessions,
            running: self.running,
            progress: self.progress_fraction(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin counting down. The caller must start its 1 Hz tick source and
    /// keep calling `tick()` until the next `pause()`. No-op while already
    /// running.
    pub fn start(&mut self) -> Option<Event> {
        if self.running {
            return None;
        }
        self.running = true;
        Some(Event::TimerStarted {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Stop counting down; the caller must release its tick source. No-op
    /// while already paused.
    pub fn pause(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.running = false;
        Some(Event::TimerPaused {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Start if paused, pause if running.
    pub fn toggle(&mut self) -> Option<Event> {
        if self.running {
            self.pause()
        } else {
            self.start()
        }
    }

    /// Advance one second. Call at most once per elapsed second while
    /// running; missed or extra ticks are corrected by `restore()`, not
    /// here. Returns the switch event when the period runs out.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            return Some(self.switch_mode());
        }
        None
    }

    /// Back to a paused, fresh work period with the session count cleared.
    /// Unconditional.
    pub fn reset(&mut self) -> Option<Event> {
        self.running = false;
        self.mode = Mode::Work;
        self.remaining_secs = self.durations.work_secs;
        self.completed_sessions = 0;
        Some(Event::TimerReset { at: Utc::now() })
    }

    /// Move to the next period in the cycle and refill the countdown.
    ///
    /// A work period that just ended counts toward the long-break cadence
    /// before the break kind is chosen; a break that ended leaves the
    /// count untouched.
    pub fn switch_mode(&mut self) -> Event {
        let from = self.mode;
        match self.mode {
            Mode::Work => {
                self.completed_sessions += 1;
                self.mode = if self.durations.long_break_due(self.completed_sessions) {
                    Mode::LongBreak
                } else {
                    Mode::ShortBreak
                };
            }
            Mode::ShortBreak | Mode::LongBreak => {
                self.mode = Mode::Work;
            }
        }
        self.remaining_secs = self.durations.for_mode(self.mode);
        Event::ModeSwitched {
            from,
            to: self.mode,
            completed_sessions: self.completed_sessions,
            at: Utc::now(),
        }
    }

    // ── Persistence ──────────────────────────────────────────────────

    /// Freeze the current state into the wire record, stamped with `now`.
    pub fn snapshot(&self, now: DateTime<Utc>) -> PersistedTimer {
        PersistedTimer {
            current_time: self.remaining_secs,
            is_work_mode: self.mode == Mode::Work,
            is_running: self.running,
            last_timestamp: Some(now.timestamp_millis()),
            completed_sessions: self.completed_sessions,
        }
    }

    /// Rebuild an engine from a persisted record, charging the wall-clock
    /// time that passed since the snapshot against the countdown.
    ///
    /// A countdown that ran out while away switches mode exactly once;
    /// additional full periods that may also have elapsed are not
    /// fast-forwarded through. The record only carries a work/break flag,
    /// so the break kind is re-derived from the session count.
    pub fn restore(durations: Durations, record: &PersistedTimer, now: DateTime<Utc>) -> Self {
        let mode = if record.is_work_mode {
            Mode::Work
        } else if durations.long_break_due(record.completed_sessions) {
            Mode::LongBreak
        } else {
            Mode::ShortBreak
        };
        let mut engine = Self {
            durations,
            mode,
            remaining_secs: record.current_time,
            completed_sessions: record.completed_sessions,
            running: record.is_running,
        };
        if record.is_running {
            if let Some(last) = record.last_timestamp {
                let elapsed_secs = (now.timestamp_millis() - last).max(0) / 1000;
                if elapsed_secs > 0 {
                    engine.remaining_secs = record
                        .current_time
                        .saturating_sub(elapsed_secs.min(u32::MAX as i64) as u32);
                    if engine.remaining_secs == 0 {
                        engine.switch_mode();
                    }
                }
            }
        }
        engine
    }
}
