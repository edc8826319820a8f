//! View models handed to templates, and the embedded template set.

use crate::{
    queries::{is_list_completed, remaining_count, sort_by_completion_then_title},
    types::{CompletionFlag, Todo, TodoList},
};
use listkeeper_web::Templates;
use serde::Serialize;

/// Template for the list index
pub const LISTS_PAGE: &str = "lists.html";
/// Template for the list creation form
pub const NEW_LIST_PAGE: &str = "new_list.html";
/// Template for a single list and its todos
pub const LIST_PAGE: &str = "list.html";
/// Template for the list rename form
pub const EDIT_LIST_PAGE: &str = "edit_list.html";

/// Compiles the templates embedded in the binary.
///
/// # Errors
///
/// Returns the Tera error if a template fails to parse.
pub fn load_templates() -> tera::Result<Templates> {
    Templates::from_sources([
        ("layout.html", include_str!("../templates/layout.html")),
        (LISTS_PAGE, include_str!("../templates/lists.html")),
        (NEW_LIST_PAGE, include_str!("../templates/new_list.html")),
        (LIST_PAGE, include_str!("../templates/list.html")),
        (EDIT_LIST_PAGE, include_str!("../templates/edit_list.html")),
    ])
}

/// One row of the list index.
#[derive(Clone, Debug, Serialize)]
pub struct ListSummary {
    /// List id, as used in URLs
    pub id: String,
    /// List title
    pub title: String,
    /// Todos not yet completed
    pub remaining: usize,
    /// All todos
    pub total: usize,
    /// Non-empty and every todo done
    pub completed: bool,
}

impl From<&TodoList> for ListSummary {
    fn from(list: &TodoList) -> Self {
        Self {
            id: list.id.to_string(),
            title: list.title.clone(),
            remaining: remaining_count(list),
            total: list.todos.len(),
            completed: is_list_completed(list),
        }
    }
}

/// A todo as shown on the list page.
#[derive(Clone, Debug, Serialize)]
pub struct TodoView {
    /// Todo id, as used in URLs
    pub id: String,
    /// Todo title
    pub title: String,
    /// Whether the todo is done
    pub completed: bool,
    /// Value the toggle button posts as `completed`
    pub toggle_value: &'static str,
}

impl From<&Todo> for TodoView {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id.to_string(),
            title: todo.title.clone(),
            completed: todo.completed,
            toggle_value: CompletionFlag::toggled(todo.completed).as_wire(),
        }
    }
}

/// A list with its todos in display order.
#[derive(Clone, Debug, Serialize)]
pub struct ListDetail {
    /// Counts and title
    #[serde(flatten)]
    pub summary: ListSummary,
    /// Todos, incomplete first then by title
    pub todos: Vec<TodoView>,
}

impl From<&TodoList> for ListDetail {
    fn from(list: &TodoList) -> Self {
        Self {
            summary: ListSummary::from(list),
            todos: sort_by_completion_then_title(&list.todos, |todo| todo.completed)
                .into_iter()
                .map(TodoView::from)
                .collect(),
        }
    }
}

/// Index rows, incomplete lists first then by title.
#[must_use]
pub fn list_summaries(lists: &[TodoList]) -> Vec<ListSummary> {
    sort_by_completion_then_title(lists, is_list_completed)
        .into_iter()
        .map(ListSummary::from)
        .collect()
}
