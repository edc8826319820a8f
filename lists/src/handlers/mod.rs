//! HTTP handlers.
//!
//! Each mutating handler follows the same shape: load the session's
//! [`ListsState`], guard the path ids, send a [`ListsAction`] through the
//! reducer, then redirect (303) or re-render the form on a validation error.

pub mod lists;
pub mod todos;

use crate::{
    error::{ListsError, ValidationError},
    reducer::ListsAction,
    state::AppState,
    types::ListsState,
};
use axum::response::{Html, Redirect};
use listkeeper_web::{ScopedStore, WebResult};
use tera::Context;

/// `GET /`
pub async fn index() -> Redirect {
    Redirect::to("/lists")
}

/// `GET /health`
pub async fn health_check() -> &'static str {
    "ok"
}

/// Sends `action` and reports a validation failure the page should show.
///
/// Any other rejection (a missing list or todo) becomes the error response.
async fn dispatch(
    app: &AppState,
    store: &mut ScopedStore<ListsState>,
    action: ListsAction,
) -> WebResult<Option<ValidationError>> {
    store.send(&app.reducer, action, &app.env).await?;
    match store.state_mut().take_error() {
        None => Ok(None),
        Some(ListsError::Validation(reason)) => Ok(Some(reason)),
        Some(err) => Err(err.into()),
    }
}

/// Renders `page`, consuming the session's pending notices.
async fn render_page(
    app: &AppState,
    store: &ScopedStore<ListsState>,
    page: &str,
    context: Context,
) -> WebResult<Html<String>> {
    let notices = store.take_notices().await?;
    app.templates.render(page, context, &notices)
}

fn list_url(list_id: impl std::fmt::Display) -> String {
    format!("/lists/{list_id}")
}
