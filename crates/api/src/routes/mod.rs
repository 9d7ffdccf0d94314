pub mod health;
pub mod todos;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /todos              list (GET), create (POST), update note (PATCH)
/// /todos/{id}         get (GET), delete (DELETE)
/// /todos/{id}/done    mark done (PATCH)
/// ```
///
/// Every route requires a valid bearer token; the [`crate::middleware::auth::AuthUser`]
/// extractor rejects unauthenticated requests before dispatch.
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/todos", todos::router())
}
