//! The todo domain object and its state transitions.

use crate::types::TodoId;

/// In-process representation of a todo note.
///
/// The id is always present: a `Todo` only comes into existence from a
/// persisted record, and a record without an id is rejected at the mapping
/// layer in `tasknote-db`. `is_done` only ever transitions false -> true,
/// via [`Todo::mark_done`]; there is no way back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub note: String,
    pub is_done: bool,
}

impl Todo {
    /// Mark this note as completed. Idempotent.
    pub fn mark_done(mut self) -> Self {
        self.is_done = true;
        self
    }

    /// Replace the note content, leaving the completion flag untouched.
    pub fn update_note(mut self, new_note: impl Into<String>) -> Self {
        self.note = new_note.into();
        self
    }
}

/// Validate note content. Rejects empty and whitespace-only strings.
pub fn validate_note(note: &str) -> Result<(), String> {
    if note.trim().is_empty() {
        return Err("Note content must not be empty".to_string());
    }
    Ok(())
}
