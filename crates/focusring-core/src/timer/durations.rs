use serde::{Deserialize, Serialize};

/// The three mutually exclusive timer periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Work,
    ShortBreak,
    LongBreak,
}

impl Mode {
    pub fn is_break(self) -> bool {
        matches!(self, Mode::ShortBreak | Mode::LongBreak)
    }
}

/// Period lengths and the long-break cadence.
///
/// Derived from the `[timer]` config section; the defaults match the
/// classic 25/5/10-minute cycle with a long break every 4th session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    /// Work period length in seconds.
    pub work_secs: u32,
    /// Short break length in seconds.
    pub short_break_secs: u32,
    /// Long break length in seconds.
    pub long_break_secs: u32,
    /// Every Nth completed work session ends in a long break.
    pub sessions_before_long_break: u32,
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            work_secs: 25 * 60,
            short_break_secs: 5 * 60,
            long_break_secs: 10 * 60,
            sessions_before_long_break: 4,
        }
    }
}

impl Durations {
    /// Full length of the given period.
    pub fn for_mode(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Work => self.work_secs,
            Mode::ShortBreak => self.short_break_secs,
            Mode::LongBreak => self.long_break_secs,
        }
    }

    /// True when `completed_sessions` lands exactly on the long-break
    /// cadence. The threshold comes from a hand-editable config file, so a
    /// zero is treated as 1 rather than dividing by it.
    pub fn long_break_due(&self, completed_sessions: u32) -> bool {
        completed_sessions > 0
            && completed_sessions % self.sessions_before_long_break.max(1) == 0
    }
}
