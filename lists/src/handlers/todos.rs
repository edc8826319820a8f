//! Todo handlers.

use super::{dispatch, list_url, lists::list_context, render_page};
use crate::{
    lookup::{require_list, require_todo},
    reducer::ListsAction,
    state::AppState,
    types::{CompletionFlag, ListsState},
    views::{ListDetail, LIST_PAGE},
};
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use listkeeper_web::{ScopedStore, WebResult};
use serde::Deserialize;

/// Body of the new-todo form.
#[derive(Debug, Deserialize)]
pub struct TodoForm {
    /// Submitted todo title
    pub todo: String,
}

/// Body of the toggle form.
#[derive(Debug, Deserialize)]
pub struct ToggleForm {
    /// `"True"` to complete, anything else to reopen
    pub completed: String,
}

/// `POST /lists/{list_id}/todos`
#[tracing::instrument(skip(app, store, form))]
pub async fn create_todo(
    State(app): State<AppState>,
    mut store: ScopedStore<ListsState>,
    Path(list_id): Path<String>,
    Form(form): Form<TodoForm>,
) -> WebResult<Response> {
    let id = require_list(store.state(), &list_id)?.id;
    let action = ListsAction::CreateTodo {
        list_id: id,
        title: form.todo.clone(),
    };

    if let Some(reason) = dispatch(&app, &mut store, action).await? {
        tracing::info!(%reason, "Todo rejected");
        let detail = ListDetail::from(require_list(store.state(), &list_id)?);
        let context = list_context(&detail, &form.todo, Some(&reason.to_string()));
        return Ok(render_page(&app, &store, LIST_PAGE, context).await?.into_response());
    }

    Ok(Redirect::to(&list_url(id)).into_response())
}

/// `POST /lists/{list_id}/todos/{todo_id}/toggle`
#[tracing::instrument(skip(app, store, form))]
pub async fn toggle_todo(
    State(app): State<AppState>,
    mut store: ScopedStore<ListsState>,
    Path((list_id, todo_id)): Path<(String, String)>,
    Form(form): Form<ToggleForm>,
) -> WebResult<Redirect> {
    let (list, todo) = require_todo(store.state(), &list_id, &todo_id)?;
    let action = ListsAction::ToggleTodo {
        list_id: list.id,
        todo_id: todo.id,
        completed: CompletionFlag::from_wire(&form.completed),
    };
    let redirect = list_url(list.id);

    dispatch(&app, &mut store, action).await?;
    Ok(Redirect::to(&redirect))
}

/// `POST /lists/{list_id}/todos/{todo_id}/delete`
#[tracing::instrument(skip(app, store))]
pub async fn delete_todo(
    State(app): State<AppState>,
    mut store: ScopedStore<ListsState>,
    Path((list_id, todo_id)): Path<(String, String)>,
) -> WebResult<Redirect> {
    let (list, todo) = require_todo(store.state(), &list_id, &todo_id)?;
    let action = ListsAction::DeleteTodo {
        list_id: list.id,
        todo_id: todo.id,
    };
    let redirect = list_url(list.id);

    dispatch(&app, &mut store, action).await?;
    Ok(Redirect::to(&redirect))
}
