//! Route table and middleware stack.

use crate::{
    config::ServerConfig,
    handlers::{self, lists, todos},
    state::AppState,
};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use listkeeper_web::correlation_id;
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

/// Create the todo-list router.
///
/// # Routes
///
/// - `GET /` - Redirect to the list index
/// - `GET /lists` - List index
/// - `POST /lists` - Create a list
/// - `GET /lists/new` - Creation form
/// - `GET /lists/{list_id}` - List detail
/// - `POST /lists/{list_id}` - Rename a list
/// - `GET /lists/{list_id}/edit` - Rename form
/// - `POST /lists/{list_id}/delete` - Delete a list
/// - `POST /lists/{list_id}/complete_all` - Complete every todo
/// - `POST /lists/{list_id}/todos` - Add a todo
/// - `POST /lists/{list_id}/todos/{todo_id}/toggle` - Set a todo's completion
/// - `POST /lists/{list_id}/todos/{todo_id}/delete` - Delete a todo
/// - `GET /health` - Liveness probe
///
/// Handlers need a session; use [`app`] to get one with the session layer
/// installed.
pub fn lists_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route("/lists", get(lists::list_index).post(lists::create_list))
        .route("/lists/new", get(lists::new_list_form))
        .route("/lists/{list_id}", get(lists::show_list).post(lists::rename_list))
        .route("/lists/{list_id}/edit", get(lists::edit_list_form))
        .route("/lists/{list_id}/delete", post(lists::delete_list))
        .route("/lists/{list_id}/complete_all", post(lists::complete_all))
        .route("/lists/{list_id}/todos", post(todos::create_todo))
        .route("/lists/{list_id}/todos/{todo_id}/toggle", post(todos::toggle_todo))
        .route("/lists/{list_id}/todos/{todo_id}/delete", post(todos::delete_todo))
        .with_state(state)
}

/// The full application: routes plus sessions, request tracing and
/// correlation ids.
///
/// Sessions are kept in memory, so they do not survive a restart.
pub fn app(config: &ServerConfig, state: AppState) -> Router {
    let sessions = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(config.secure_cookies)
        .with_expiry(Expiry::OnInactivity(config.session_ttl()));

    lists_router(state)
        .layer(sessions)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(correlation_id))
}
