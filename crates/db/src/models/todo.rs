//! Store-facing shape of a todo note and its mapping to the domain object.

use sqlx::FromRow;
use tasknote_core::error::CoreError;
use tasknote_core::todo::Todo;
use tasknote_core::types::TodoId;

/// A row from the `todos` table.
///
/// `id` is `None` only for records that have not been inserted yet; the
/// store assigns the id on first save. A row read back without an id is an
/// integrity fault, surfaced by [`TodoRecord::into_domain`].
#[derive(Debug, Clone, FromRow)]
pub struct TodoRecord {
    pub id: Option<TodoId>,
    pub note: String,
    pub is_done: bool,
}

impl TodoRecord {
    /// Build the pre-insert record for a new note.
    pub fn new(note: impl Into<String>) -> Self {
        TodoRecord {
            id: None,
            note: note.into(),
            is_done: false,
        }
    }

    /// Record -> Domain. Fails when the persisted record carries no id.
    pub fn into_domain(self) -> Result<Todo, CoreError> {
        let id = self.id.ok_or_else(|| {
            CoreError::Integrity("persisted record missing identifier".to_string())
        })?;
        Ok(Todo {
            id,
            note: self.note,
            is_done: self.is_done,
        })
    }
}

/// Domain -> Record. Total: the id passes through unchanged.
impl From<Todo> for TodoRecord {
    fn from(todo: Todo) -> Self {
        TodoRecord {
            id: Some(todo.id),
            note: todo.note,
            is_done: todo.is_done,
        }
    }
}
