//! Handlers for the `/api/todos` resource.

use axum::extract::{OriginalUri, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use tasknote_core::todo::Todo;
use tasknote_core::types::TodoId;

use crate::error::ApiResult;
use crate::middleware::auth::AuthUser;
use crate::response::ResponseEnvelope;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Transfer shapes
// ---------------------------------------------------------------------------

/// Wire representation of a todo: `{id, note, isDone}`.
///
/// Structurally identical to the domain object today, but kept separate so
/// internal fields can evolve without breaking the contract.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoDto {
    pub id: TodoId,
    pub note: String,
    pub is_done: bool,
}

impl From<Todo> for TodoDto {
    fn from(todo: Todo) -> Self {
        TodoDto {
            id: todo.id,
            note: todo.note,
            is_done: todo.is_done,
        }
    }
}

/// Body of `POST /api/todos`.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub note: String,
}

/// Body of `PATCH /api/todos`.
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub id: TodoId,
    pub note: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/todos
///
/// Create a new note; the store assigns the id.
pub async fn create_todo(
    user: AuthUser,
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Json(body): Json<CreateTodoRequest>,
) -> ApiResult<impl IntoResponse> {
    let todo = state
        .service
        .create(&body.note)
        .await
        .map_err(|e| e.at(&uri))?;

    tracing::info!(subject = %user.subject, todo_id = %todo.id, "Todo created");

    Ok((
        StatusCode::CREATED,
        Json(ResponseEnvelope::data(TodoDto::from(todo))),
    ))
}

/// GET /api/todos
///
/// List all notes.
pub async fn list_todos(
    _user: AuthUser,
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> ApiResult<impl IntoResponse> {
    let todos = state.service.list().await.map_err(|e| e.at(&uri))?;

    let dtos: Vec<TodoDto> = todos.into_iter().map(TodoDto::from).collect();
    Ok(Json(ResponseEnvelope::data(dtos)))
}

/// GET /api/todos/{id}
///
/// Get a single note by id.
pub async fn get_todo(
    _user: AuthUser,
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<TodoId>,
) -> ApiResult<impl IntoResponse> {
    let todo = state.service.get(id).await.map_err(|e| e.at(&uri))?;

    Ok(Json(ResponseEnvelope::data(TodoDto::from(todo))))
}

/// PATCH /api/todos
///
/// Replace the text of the note named by the body's `id`. The completion
/// flag is untouched.
pub async fn update_todo(
    user: AuthUser,
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Json(body): Json<UpdateTodoRequest>,
) -> ApiResult<impl IntoResponse> {
    let todo = state
        .service
        .update_note(body.id, &body.note)
        .await
        .map_err(|e| e.at(&uri))?;

    tracing::info!(subject = %user.subject, todo_id = %todo.id, "Todo note updated");

    Ok(Json(ResponseEnvelope::data(TodoDto::from(todo))))
}

/// PATCH /api/todos/{id}/done
///
/// Mark a note as completed. Idempotent.
pub async fn mark_done(
    user: AuthUser,
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<TodoId>,
) -> ApiResult<impl IntoResponse> {
    let todo = state.service.mark_done(id).await.map_err(|e| e.at(&uri))?;

    tracing::info!(subject = %user.subject, todo_id = %todo.id, "Todo marked done");

    Ok(Json(ResponseEnvelope::data(TodoDto::from(todo))))
}

/// DELETE /api/todos/{id}
///
/// Delete a note. Deleting an id that does not exist is still a 204.
pub async fn delete_todo(
    user: AuthUser,
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<TodoId>,
) -> ApiResult<impl IntoResponse> {
    state.service.delete(id).await.map_err(|e| e.at(&uri))?;

    tracing::info!(subject = %user.subject, todo_id = %id, "Todo deleted");

    Ok(StatusCode::NO_CONTENT)
}
