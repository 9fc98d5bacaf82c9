//! Theme selection commands.

use clap::Subcommand;
use focusring_core::storage::Database;
use focusring_core::theme::ThemeCatalog;

#[derive(Subcommand)]
pub enum ThemeAction {
    /// List available themes as JSON
    List,
    /// Print the selected theme key
    Current,
    /// Select a theme
    Set {
        /// Theme key (e.g. "dark")
        key: String,
    },
}

pub fn run(action: ThemeAction) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = ThemeCatalog::load();

    match action {
        ThemeAction::List => {
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }
        ThemeAction::Current => {
            let db = Database::open()?;
            println!("{}", catalog.selected(&db));
        }
        ThemeAction::Set { key } => {
            let db = Database::open()?;
            catalog.select(&db, &key)?;
            println!("Theme set: {key}");
        }
    }
    Ok(())
}
