//! Completion queries and display ordering.

use crate::types::{Todo, TodoList};

/// Anything with a display title.
pub trait Titled {
    /// The title used for ordering
    fn title(&self) -> &str;
}

impl Titled for TodoList {
    fn title(&self) -> &str {
        &self.title
    }
}

impl Titled for Todo {
    fn title(&self) -> &str {
        &self.title
    }
}

/// True iff the list has at least one todo and every todo is completed.
#[must_use]
pub fn is_list_completed(list: &TodoList) -> bool {
    !list.todos.is_empty() && list.todos.iter().all(|todo| todo.completed)
}

/// Number of todos not yet completed.
#[must_use]
pub fn remaining_count(list: &TodoList) -> usize {
    list.todos.iter().filter(|todo| !todo.completed).count()
}

/// Marks every todo in the list completed.
pub fn mark_all_complete(list: &mut TodoList) {
    for todo in &mut list.todos {
        todo.completed = true;
    }
}

/// Orders items incomplete-first, then by case-insensitive title.
///
/// The sort is stable: items that compare equal keep their relative order.
pub fn sort_by_completion_then_title<T, F>(items: &[T], is_completed: F) -> Vec<&T>
where
    T: Titled,
    F: Fn(&T) -> bool,
{
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by_cached_key(|item| (is_completed(item), item.title().to_lowercase()));
    sorted
}
