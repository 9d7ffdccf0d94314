//! Route definitions for the todo resource.
//!
//! Mounted at `/todos` by `api_routes()`.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::todos;
use crate::state::AppState;

/// Todo routes.
///
/// ```text
/// GET    /            -> list_todos
/// POST   /            -> create_todo
/// PATCH  /            -> update_todo ({id, note} in body)
/// GET    /{id}        -> get_todo
/// DELETE /{id}        -> delete_todo
/// PATCH  /{id}/done   -> mark_done
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(todos::list_todos)
                .post(todos::create_todo)
                .patch(todos::update_todo),
        )
        .route("/{id}", get(todos::get_todo).delete(todos::delete_todo))
        .route("/{id}/done", patch(todos::mark_done))
}
