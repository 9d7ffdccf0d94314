//! Business rules for the todo lifecycle.

use tasknote_core::error::CoreError;
use tasknote_core::todo::{validate_note, Todo};
use tasknote_core::types::TodoId;
use tasknote_db::models::todo::TodoRecord;
use tasknote_db::repositories::TodoRepo;
use tasknote_db::DbPool;

use crate::error::AppError;

/// Owns all CRUD and state-transition rules for todos.
///
/// The only component that talks to [`TodoRepo`]; handlers call in here and
/// translate the returned error kinds into HTTP responses. Every mutation
/// re-reads the current record before writing, so a caller can neither
/// resurrect a deleted note nor overwrite fields it does not know about.
#[derive(Clone)]
pub struct TodoService {
    pool: DbPool,
}

impl TodoService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create a new note. The record is saved without an id; the store
    /// assigns one on insert.
    pub async fn create(&self, note: &str) -> Result<Todo, AppError> {
        validate_note(note).map_err(CoreError::Validation)?;

        let saved = TodoRepo::save(&self.pool, &TodoRecord::new(note)).await?;
        Ok(saved.into_domain()?)
    }

    /// Look up a single note by id.
    pub async fn get(&self, id: TodoId) -> Result<Todo, AppError> {
        let record = TodoRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or(CoreError::NotFound { entity: "Todo", id })?;
        Ok(record.into_domain()?)
    }

    /// Fetch all notes in the store's native order.
    pub async fn list(&self) -> Result<Vec<Todo>, AppError> {
        let records = TodoRepo::find_all(&self.pool).await?;
        records
            .into_iter()
            .map(|record| record.into_domain().map_err(AppError::from))
            .collect()
    }

    /// Replace the note text. The completion flag is re-asserted from the
    /// loaded record, never taken from the caller.
    pub async fn update_note(&self, id: TodoId, new_note: &str) -> Result<Todo, AppError> {
        validate_note(new_note).map_err(CoreError::Validation)?;

        let current = self.get(id).await?;
        let updated = current.update_note(new_note);
        let saved = TodoRepo::save(&self.pool, &TodoRecord::from(updated)).await?;
        Ok(saved.into_domain()?)
    }

    /// Set the completion flag. Idempotent; the note text is re-asserted
    /// from the loaded record.
    pub async fn mark_done(&self, id: TodoId) -> Result<Todo, AppError> {
        let current = self.get(id).await?;
        let done = current.mark_done();
        let saved = TodoRepo::save(&self.pool, &TodoRecord::from(done)).await?;
        Ok(saved.into_domain()?)
    }

    /// Delete by id. Deleting a nonexistent id is a silent success; the
    /// store no-ops and the caller sees the same outcome either way.
    pub async fn delete(&self, id: TodoId) -> Result<(), AppError> {
        TodoRepo::delete_by_id(&self.pool, id).await?;
        Ok(())
    }
}
