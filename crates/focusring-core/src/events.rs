use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::Mode;

/// Every state change in the engine produces an Event.
/// The presenter renders them; `timer status` prints one as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        mode: Mode,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    /// A period ran out (or was fast-forwarded past by restore) and the
    /// engine moved to the next one in the cycle.
    ModeSwitched {
        from: Mode,
        to: Mode,
        completed_sessions: u32,
        at: DateTime<Utc>,
    },
    TimerReset {
        at: DateTime<Utc>,
    },
    StateSnapshot {
        mode: Mode,
        remaining_secs: u32,
        total_secs: u32,
        completed_sessions: u32,
        running: bool,
        /// 1.0 at a fresh period, 0.0 when it expires.
        progress: f64,
        at: DateTime<Utc>,
    },
}
