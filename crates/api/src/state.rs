use std::sync::Arc;

use crate::auth::Authenticator;
use crate::config::ServerConfig;
use crate::service::TodoService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; constructed once in `main` (or the test harness) and
/// injected everywhere -- there is no global bootstrap state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: tasknote_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Todo lifecycle service; the only component that touches the store.
    pub service: TodoService,
    /// Bearer-token gate consulted before every dispatch.
    pub authenticator: Arc<dyn Authenticator>,
}
