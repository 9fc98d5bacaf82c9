//! Timer control commands.
//!
//! The CLI is the timer's presenter: it forwards user commands into the
//! engine, renders the resulting state, and owns the tick source. Every
//! state change is snapshotted back to the store, and every load runs the
//! restore reconciliation so a countdown keeps draining across
//! invocations, exactly like the widget surviving a page reload.

use std::io::Write;

use chrono::Utc;
use clap::Subcommand;
use focusring_core::storage::{Config, Database, Store};
use focusring_core::timer::{Durations, Mode, PersistedTimer, TimerEngine};

const TIMER_KEY: &str = "timerState";

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start the countdown
    Start,
    /// Pause the countdown
    Pause,
    /// Start if paused, pause if running
    Toggle,
    /// Back to a fresh work period
    Reset,
    /// Print current timer state as JSON
    Status,
    /// Follow the countdown live until Ctrl-C
    Run,
}

/// Load the engine from the store, reconciling elapsed wall-clock time.
/// Malformed or missing state falls back to a fresh engine.
fn load_engine(store: &dyn Store, durations: Durations) -> TimerEngine {
    if let Ok(Some(json)) = store.get(TIMER_KEY) {
        match serde_json::from_str::<PersistedTimer>(&json) {
            Ok(record) => return TimerEngine::restore(durations, &record, Utc::now()),
            Err(e) => tracing::warn!("ignoring malformed timer state: {e}"),
        }
    }
    TimerEngine::new(durations)
}

fn save_engine(store: &dyn Store, engine: &TimerEngine) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(&engine.snapshot(Utc::now()))?;
    store.set(TIMER_KEY, &json)?;
    Ok(())
}

/// `MM:SS`, zero-padded.
fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Header line matching the widget's mode indicator.
fn mode_label(engine: &TimerEngine) -> String {
    let durations = engine.durations();
    match engine.mode() {
        Mode::Work => format!(
            "Work Time ({}/{})",
            engine.completed_sessions() + 1,
            durations.sessions_before_long_break
        ),
        Mode::ShortBreak => format!("Short Break ({}min)", durations.short_break_secs / 60),
        Mode::LongBreak => format!("Long Break ({}min)", durations.long_break_secs / 60),
    }
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let db = Database::open()?;
    let mut engine = load_engine(&db, config.durations());

    match action {
        TimerAction::Start => {
            match engine.start() {
                Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
                None => println!("{}", serde_json::to_string_pretty(&engine.state_event())?),
            }
        }
        TimerAction::Pause => {
            match engine.pause() {
                Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
                None => println!("{}", serde_json::to_string_pretty(&engine.state_event())?),
            }
        }
        TimerAction::Toggle => {
            match engine.toggle() {
                Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
                None => println!("{}", serde_json::to_string_pretty(&engine.state_event())?),
            }
        }
        TimerAction::Reset => {
            if let Some(event) = engine.reset() {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
        }
        TimerAction::Status => {
            println!("{}", serde_json::to_string_pretty(&engine.state_event())?);
        }
        TimerAction::Run => {
            engine.start();
            save_engine(&db, &engine)?;
            return follow(&db, engine);
        }
    }

    save_engine(&db, &engine)?;
    Ok(())
}

/// Drive the countdown at 1 Hz until Ctrl-C.
///
/// The interval is the engine's tick source: acquired here, released on
/// shutdown. State is persisted after every tick (as the widget does), and
/// the final save keeps `running` set so the next invocation reconciles
/// the time spent away instead of losing it.
fn follow(db: &Database, mut engine: TimerEngine) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(1));
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        // The first tick completes immediately; consume it so the
        // countdown starts a full second later.
        interval.tick().await;

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    if let Some(event) = engine.tick() {
                        println!();
                        println!("{}", serde_json::to_string(&event)?);
                    }
                    save_engine(db, &engine)?;
                    print!(
                        "\r{}  {}   ",
                        mode_label(&engine),
                        format_clock(engine.remaining_secs())
                    );
                    std::io::stdout().flush()?;
                }
                _ = &mut ctrl_c => {
                    println!();
                    save_engine(db, &engine)?;
                    break;
                }
            }
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_formatting_is_zero_padded() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(599), "09:59");
    }

    #[test]
    fn mode_labels_match_the_widget() {
        let mut engine = TimerEngine::new(Durations::default());
        assert_eq!(mode_label(&engine), "Work Time (1/4)");
        engine.switch_mode();
        assert_eq!(mode_label(&engine), "Short Break (5min)");
        engine.switch_mode();
        assert_eq!(mode_label(&engine), "Work Time (2/4)");
    }
}
