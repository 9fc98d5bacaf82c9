mod durations;
mod engine;
mod persisted;

pub use durations::{Durations, Mode};
pub use engine::TimerEngine;
pub use persisted::PersistedTimer;
