//! Todo item domain model.
//!
//! # Responsibility
//! - Define the single todo record and its construction rules.
//! - Provide mutation helpers that keep `updated_at` current.
//!
//! # Invariants
//! - `title` is trimmed and non-empty for items built through `Todo::new`.
//! - `created_at` is set once and never modified.
//! - Every mutation strictly advances `updated_at`.

use chrono::{DateTime, Duration, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Caller-supplied identifier for a todo item.
///
/// Uniqueness is not enforced here; that belongs to whatever holds the items.
pub type TodoId = i64;

/// Validation failures for todo construction and revalidation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TodoValidationError {
    /// Title is empty or whitespace-only.
    #[error("todo title cannot be empty")]
    EmptyTitle,
}

/// A single todo item with its metadata.
///
/// Fields are public so items can be rebuilt from storage or wire formats;
/// such items should be checked with [`Todo::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    /// Free text, omitted on the wire when empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Creates a new incomplete todo.
    ///
    /// Both `title` and `description` are trimmed before storing.
    ///
    /// # Errors
    /// - Returns `TodoValidationError::EmptyTitle` when the trimmed title is empty.
    pub fn new(
        id: TodoId,
        title: impl AsRef<str>,
        description: impl AsRef<str>,
    ) -> Result<Self, TodoValidationError> {
        let title = title.as_ref().trim();
        if title.is_empty() {
            debug!("event=todo_create module=model status=rejected id={id} reason=empty_title");
            return Err(TodoValidationError::EmptyTitle);
        }

        let now = Utc::now();
        debug!("event=todo_create module=model status=ok id={id}");
        Ok(Self {
            id,
            title: title.to_string(),
            description: description.as_ref().trim().to_string(),
            completed: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Marks this todo as completed.
    pub fn mark_complete(&mut self) {
        self.completed = true;
        self.touch();
        debug!("event=todo_complete module=model status=ok id={}", self.id);
    }

    /// Marks this todo as not completed.
    pub fn mark_incomplete(&mut self) {
        self.completed = false;
        self.touch();
        debug!("event=todo_reopen module=model status=ok id={}", self.id);
    }

    /// Replaces title and/or description.
    ///
    /// Inputs are trimmed; an empty input leaves that field unchanged, so a
    /// description cannot be cleared through this method. `updated_at` is
    /// refreshed even when nothing changed.
    pub fn update(&mut self, title: impl AsRef<str>, description: impl AsRef<str>) {
        let title = title.as_ref().trim();
        let description = description.as_ref().trim();

        if !title.is_empty() {
            self.title = title.to_string();
        }
        if !description.is_empty() {
            self.description = description.to_string();
        }

        self.touch();
        debug!(
            "event=todo_update module=model status=ok id={} title_changed={} description_changed={}",
            self.id,
            !title.is_empty(),
            !description.is_empty()
        );
    }

    /// Checks the title invariant without mutating the item.
    pub fn validate(&self) -> Result<(), TodoValidationError> {
        if self.title.trim().is_empty() {
            return Err(TodoValidationError::EmptyTitle);
        }
        Ok(())
    }

    /// Returns whether this todo is completed.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    // Clock resolution can make two calls observe the same instant.
    fn touch(&mut self) {
        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            // Saturates at the largest representable instant.
            self.updated_at
                .checked_add_signed(Duration::nanoseconds(1))
                .unwrap_or(self.updated_at)
        };
    }
}
