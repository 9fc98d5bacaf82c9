mod config;
pub mod database;

pub use config::Config;
pub use database::Database;

use std::path::PathBuf;

use crate::error::StorageError;

/// Abstract durable key-value store the timer and todo list persist
/// through.
///
/// Implementations only need get/set semantics. Everything above the trait
/// treats a missing or unreadable value as "no prior state" rather than an
/// error.
pub trait Store {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Returns `~/.config/focusring[-dev]/` based on FOCUSRING_ENV.
///
/// Set FOCUSRING_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("FOCUSRING_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("focusring-dev")
    } else {
        base_dir.join("focusring")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
