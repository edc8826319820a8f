//! List handlers.

use super::{dispatch, list_url, render_page};
use crate::{
    lookup::require_list,
    reducer::ListsAction,
    state::AppState,
    types::ListsState,
    views::{list_summaries, ListDetail, ListSummary, EDIT_LIST_PAGE, LISTS_PAGE, LIST_PAGE, NEW_LIST_PAGE},
};
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use listkeeper_web::{ScopedStore, WebResult};
use serde::Deserialize;
use tera::Context;

/// Body of the create and rename forms.
#[derive(Debug, Deserialize)]
pub struct ListTitleForm {
    /// Submitted list title
    pub list_title: String,
}

/// `GET /lists`
#[tracing::instrument(skip_all)]
pub async fn list_index(State(app): State<AppState>, store: ScopedStore<ListsState>) -> WebResult<Html<String>> {
    let mut context = Context::new();
    context.insert("lists", &list_summaries(&store.state().lists));
    render_page(&app, &store, LISTS_PAGE, context).await
}

/// `GET /lists/new`
#[tracing::instrument(skip_all)]
pub async fn new_list_form(State(app): State<AppState>, store: ScopedStore<ListsState>) -> WebResult<Html<String>> {
    render_page(&app, &store, NEW_LIST_PAGE, new_list_context("", None)).await
}

/// `POST /lists`
#[tracing::instrument(skip_all)]
pub async fn create_list(
    State(app): State<AppState>,
    mut store: ScopedStore<ListsState>,
    Form(form): Form<ListTitleForm>,
) -> WebResult<Response> {
    let action = ListsAction::CreateList {
        title: form.list_title.clone(),
    };

    if let Some(reason) = dispatch(&app, &mut store, action).await? {
        tracing::info!(%reason, "List creation rejected");
        let context = new_list_context(&form.list_title, Some(&reason.to_string()));
        return Ok(render_page(&app, &store, NEW_LIST_PAGE, context).await?.into_response());
    }

    tracing::info!("List created");
    Ok(Redirect::to("/lists").into_response())
}

/// `GET /lists/{list_id}`
#[tracing::instrument(skip(app, store))]
pub async fn show_list(
    State(app): State<AppState>,
    store: ScopedStore<ListsState>,
    Path(list_id): Path<String>,
) -> WebResult<Html<String>> {
    let detail = ListDetail::from(require_list(store.state(), &list_id)?);
    render_page(&app, &store, LIST_PAGE, list_context(&detail, "", None)).await
}

/// `GET /lists/{list_id}/edit`
#[tracing::instrument(skip(app, store))]
pub async fn edit_list_form(
    State(app): State<AppState>,
    store: ScopedStore<ListsState>,
    Path(list_id): Path<String>,
) -> WebResult<Html<String>> {
    let summary = ListSummary::from(require_list(store.state(), &list_id)?);
    let title = summary.title.clone();
    render_page(&app, &store, EDIT_LIST_PAGE, edit_list_context(&summary, &title, None)).await
}

/// `POST /lists/{list_id}`
#[tracing::instrument(skip(app, store, form))]
pub async fn rename_list(
    State(app): State<AppState>,
    mut store: ScopedStore<ListsState>,
    Path(list_id): Path<String>,
    Form(form): Form<ListTitleForm>,
) -> WebResult<Response> {
    let list = require_list(store.state(), &list_id)?;
    let (id, summary) = (list.id, ListSummary::from(list));

    let action = ListsAction::RenameList {
        list_id: id,
        title: form.list_title.clone(),
    };

    if let Some(reason) = dispatch(&app, &mut store, action).await? {
        tracing::info!(%reason, "Rename rejected");
        let context = edit_list_context(&summary, &form.list_title, Some(&reason.to_string()));
        return Ok(render_page(&app, &store, EDIT_LIST_PAGE, context).await?.into_response());
    }

    Ok(Redirect::to(&list_url(id)).into_response())
}

/// `POST /lists/{list_id}/delete`
#[tracing::instrument(skip(app, store))]
pub async fn delete_list(
    State(app): State<AppState>,
    mut store: ScopedStore<ListsState>,
    Path(list_id): Path<String>,
) -> WebResult<Redirect> {
    let id = require_list(store.state(), &list_id)?.id;
    dispatch(&app, &mut store, ListsAction::DeleteList { list_id: id }).await?;
    tracing::info!("List deleted");
    Ok(Redirect::to("/lists"))
}

/// `POST /lists/{list_id}/complete_all`
#[tracing::instrument(skip(app, store))]
pub async fn complete_all(
    State(app): State<AppState>,
    mut store: ScopedStore<ListsState>,
    Path(list_id): Path<String>,
) -> WebResult<Redirect> {
    let id = require_list(store.state(), &list_id)?.id;
    dispatch(&app, &mut store, ListsAction::CompleteAll { list_id: id }).await?;
    Ok(Redirect::to(&list_url(id)))
}

fn new_list_context(list_title: &str, error: Option<&str>) -> Context {
    let mut context = Context::new();
    context.insert("list_title", list_title);
    context.insert("error", &error);
    context
}

fn edit_list_context(list: &ListSummary, list_title: &str, error: Option<&str>) -> Context {
    let mut context = Context::new();
    context.insert("list", list);
    context.insert("list_title", list_title);
    context.insert("error", &error);
    context
}

/// Context for the list page, shared with the todo form re-render.
pub(super) fn list_context(list: &ListDetail, todo: &str, error: Option<&str>) -> Context {
    let mut context = Context::new();
    context.insert("list", list);
    context.insert("todo", todo);
    context.insert("error", &error);
    context
}
