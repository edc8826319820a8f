//! Lookup by id, and the guards handlers run before touching a resource.
//!
//! A miss is always an error, never an empty value: callers either get the
//! list/todo or a `NotFound` they propagate with `?`.

use crate::{
    error::ListsError,
    types::{ListId, ListsState, Todo, TodoId, TodoList},
};

/// Finds a list by id.
///
/// # Errors
///
/// [`ListsError::ListNotFound`] if no list has this id.
pub fn find_list_by_id(id: ListId, lists: &[TodoList]) -> Result<&TodoList, ListsError> {
    lists
        .iter()
        .find(|list| list.id == id)
        .ok_or_else(|| ListsError::ListNotFound(id.to_string()))
}

/// Finds a list by id, mutably.
///
/// # Errors
///
/// [`ListsError::ListNotFound`] if no list has this id.
pub fn find_list_by_id_mut(id: ListId, lists: &mut [TodoList]) -> Result<&mut TodoList, ListsError> {
    lists
        .iter_mut()
        .find(|list| list.id == id)
        .ok_or_else(|| ListsError::ListNotFound(id.to_string()))
}

/// Finds a todo by id within one list's todos.
///
/// # Errors
///
/// [`ListsError::TodoNotFound`] if no todo has this id.
pub fn find_todo_by_id(id: TodoId, todos: &[Todo]) -> Result<&Todo, ListsError> {
    todos
        .iter()
        .find(|todo| todo.id == id)
        .ok_or_else(|| ListsError::TodoNotFound(id.to_string()))
}

/// Finds a todo by id within one list's todos, mutably.
///
/// # Errors
///
/// [`ListsError::TodoNotFound`] if no todo has this id.
pub fn find_todo_by_id_mut(id: TodoId, todos: &mut [Todo]) -> Result<&mut Todo, ListsError> {
    todos
        .iter_mut()
        .find(|todo| todo.id == id)
        .ok_or_else(|| ListsError::TodoNotFound(id.to_string()))
}

/// Resolves a raw `{list_id}` path segment.
///
/// A segment that is not a valid id is reported exactly like an unknown one.
///
/// # Errors
///
/// [`ListsError::ListNotFound`] if the segment does not name a list.
pub fn require_list<'a>(state: &'a ListsState, raw_list_id: &str) -> Result<&'a TodoList, ListsError> {
    let id = raw_list_id
        .parse::<ListId>()
        .map_err(|_| ListsError::ListNotFound(raw_list_id.to_string()))?;
    find_list_by_id(id, &state.lists)
}

/// Resolves raw `{list_id}` and `{todo_id}` path segments.
///
/// # Errors
///
/// [`ListsError::ListNotFound`] or [`ListsError::TodoNotFound`], checked in
/// that order.
pub fn require_todo<'a>(
    state: &'a ListsState,
    raw_list_id: &str,
    raw_todo_id: &str,
) -> Result<(&'a TodoList, &'a Todo), ListsError> {
    let list = require_list(state, raw_list_id)?;
    let todo_id = raw_todo_id
        .parse::<TodoId>()
        .map_err(|_| ListsError::TodoNotFound(raw_todo_id.to_string()))?;
    let todo = find_todo_by_id(todo_id, &list.todos)?;
    Ok((list, todo))
}
