//! # Focusring Core Library
//!
//! Core state for the Focusring Pomodoro timer and its companion to-do
//! list. The library is presentation-agnostic: a front end (the bundled
//! CLI, or anything else) drives the engine through commands and renders
//! the events it emits.
//!
//! ## Architecture
//!
//! - **Timer engine**: a caller-driven state machine. The caller owns the
//!   1 Hz tick source and reconciles downtime through `restore()`.
//! - **Storage**: a small key-value [`Store`] abstraction with a SQLite
//!   implementation, plus TOML-based configuration.
//! - **Todo list**: independent ordered list, persisted wholesale after
//!   every mutation.
//! - **Themes**: read-only catalog consumed by the presentation layer.
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: Pomodoro state machine with restore reconciliation
//! - [`TodoStore`]: persistent to-do list
//! - [`Database`]: SQLite key-value store
//! - [`Config`]: application configuration management

pub mod error;
pub mod events;
pub mod storage;
pub mod theme;
pub mod timer;
pub mod todo;

pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use events::Event;
pub use storage::{Config, Database, Store};
pub use theme::{Theme, ThemeCatalog};
pub use timer::{Durations, Mode, PersistedTimer, TimerEngine};
pub use todo::{Todo, TodoStore};
