//! Persistent to-do list.
//!
//! Independent of the timer. The list is written back wholesale through
//! the [`Store`] after every mutation and restored wholesale at startup;
//! display order is insertion order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, ValidationError};
use crate::storage::Store;

const TODOS_KEY: &str = "todos";

/// One to-do entry, matching the persisted wire record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Epoch milliseconds at creation; doubles as the stable identity.
    pub id: i64,
    pub text: String,
    pub completed: bool,
    /// Creation time, serialized as an ISO-8601 string.
    pub timestamp: DateTime<Utc>,
}

/// Ordered list of todos with write-through persistence.
#[derive(Debug, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
}

impl TodoStore {
    /// Restore the list from the store. Malformed or missing data yields
    /// an empty list rather than an error.
    pub fn load(store: &dyn Store) -> Self {
        let todos = match store.get(TODOS_KEY) {
            Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_else(|e| {
                tracing::warn!("ignoring malformed todo list: {e}");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("todo list unreadable: {e}");
                Vec::new()
            }
        };
        Self { todos }
    }

    /// Entries in insertion order.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Append a new entry and persist. Returns the new entry's id.
    ///
    /// # Errors
    ///
    /// Rejects empty (or whitespace-only) text; propagates store failures.
    pub fn add(
        &mut self,
        store: &dyn Store,
        text: &str,
        now: DateTime<Utc>,
    ) -> Result<i64, CoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyTodoText.into());
        }
        let mut id = now.timestamp_millis();
        // Two adds within the same millisecond must not collide.
        if let Some(last) = self.todos.last() {
            if last.id >= id {
                id = last.id + 1;
            }
        }
        self.todos.push(Todo {
            id,
            text: text.to_string(),
            completed: false,
            timestamp: now,
        });
        self.persist(store)?;
        Ok(id)
    }

    /// Flip an entry's completed flag and persist. Returns false when the
    /// id is absent (no-op).
    pub fn toggle(&mut self, store: &dyn Store, id: i64) -> Result<bool, CoreError> {
        match self.todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.completed = !todo.completed;
                self.persist(store)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove an entry and persist. Returns false when the id is absent
    /// (no-op).
    pub fn delete(&mut self, store: &dyn Store, id: i64) -> Result<bool, CoreError> {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        if self.todos.len() == before {
            return Ok(false);
        }
        self.persist(store)?;
        Ok(true)
    }

    fn persist(&self, store: &dyn Store) -> Result<(), CoreError> {
        let json = serde_json::to_string(&self.todos)?;
        store.set(TODOS_KEY, &json)?;
        Ok(())
    }
}
