//! Repository for the `todos` table.

use sqlx::PgPool;
use tasknote_core::types::TodoId;

use crate::models::todo::TodoRecord;

/// Column list for todos queries.
const COLUMNS: &str = "id, note, is_done";

/// Key-addressed access to persisted todo records.
pub struct TodoRepo;

impl TodoRepo {
    /// Save a record with insert-or-update semantics: a record without an id
    /// is inserted and the database assigns one; a record with an id
    /// overwrites that row. Returns the row as persisted.
    pub async fn save(pool: &PgPool, record: &TodoRecord) -> Result<TodoRecord, sqlx::Error> {
        match record.id {
            None => {
                let query =
                    format!("INSERT INTO todos (note, is_done) VALUES ($1, $2) RETURNING {COLUMNS}");
                sqlx::query_as::<_, TodoRecord>(&query)
                    .bind(&record.note)
                    .bind(record.is_done)
                    .fetch_one(pool)
                    .await
            }
            Some(id) => {
                let query = format!(
                    "INSERT INTO todos (id, note, is_done) VALUES ($1, $2, $3)
                     ON CONFLICT (id) DO UPDATE SET note = EXCLUDED.note, is_done = EXCLUDED.is_done
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, TodoRecord>(&query)
                    .bind(id)
                    .bind(&record.note)
                    .bind(record.is_done)
                    .fetch_one(pool)
                    .await
            }
        }
    }

    /// Find a todo record by its id.
    pub async fn find_by_id(pool: &PgPool, id: TodoId) -> Result<Option<TodoRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = $1");
        sqlx::query_as::<_, TodoRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch all todo records in the store's native order.
    pub async fn find_all(pool: &PgPool) -> Result<Vec<TodoRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos");
        sqlx::query_as::<_, TodoRecord>(&query)
            .fetch_all(pool)
            .await
    }

    /// Delete by id. Returns `true` if a row was deleted; deleting a
    /// missing id is a no-op.
    pub async fn delete_by_id(pool: &PgPool, id: TodoId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove every todo record. Returns the number of rows deleted.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos").execute(pool).await?;
        Ok(result.rows_affected())
    }
}
