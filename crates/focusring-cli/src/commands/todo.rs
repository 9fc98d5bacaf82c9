//! To-do list commands.

use chrono::Utc;
use clap::Subcommand;
use focusring_core::storage::Database;
use focusring_core::todo::TodoStore;

#[derive(Subcommand)]
pub enum TodoAction {
    /// Add an entry
    Add {
        /// Entry text
        text: String,
    },
    /// List entries in insertion order as JSON
    List,
    /// Flip an entry's completed flag
    Toggle {
        /// Entry id (epoch milliseconds)
        id: i64,
    },
    /// Remove an entry
    Delete {
        /// Entry id (epoch milliseconds)
        id: i64,
    },
}

pub fn run(action: TodoAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let mut todos = TodoStore::load(&db);

    match action {
        TodoAction::Add { text } => {
            let id = todos.add(&db, &text, Utc::now())?;
            println!("Todo added: {id}");
        }
        TodoAction::List => {
            println!("{}", serde_json::to_string_pretty(todos.todos())?);
        }
        TodoAction::Toggle { id } => {
            if todos.toggle(&db, id)? {
                println!("Todo toggled: {id}");
            } else {
                println!("Todo not found: {id}");
            }
        }
        TodoAction::Delete { id } => {
            if todos.delete(&db, id)? {
                println!("Todo deleted: {id}");
            } else {
                println!("Todo not found: {id}");
            }
        }
    }
    Ok(())
}
