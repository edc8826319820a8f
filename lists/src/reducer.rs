//! Reducer for session-scoped todo lists.
//!
//! Every command either succeeds, mutating the state and returning a
//! `Persist` plus a success notice, or is rejected. A rejection leaves the
//! lists untouched, records the reason in [`ListsState::last_error`] and
//! returns no effects.

use crate::{
    error::ListsError,
    lookup::{find_list_by_id_mut, find_todo_by_id_mut},
    queries::mark_all_complete,
    types::{CompletionFlag, ListId, ListsState, Todo, TodoId, TodoList},
    validation::{error_for_list_title, error_for_title_length},
};
use listkeeper_core::{
    effect::Effect,
    environment::{IdGenerator, RandomIds},
    reducer::Reducer,
    smallvec, SmallVec,
};
use std::sync::Arc;

/// Notice shown after a list is created
pub const LIST_CREATED: &str = "The list has been created.";
/// Notice shown after a list is renamed
pub const LIST_RENAMED: &str = "The list has been renamed.";
/// Notice shown after a list is deleted
pub const LIST_DELETED: &str = "The list has been deleted.";
/// Notice shown after a todo is added
pub const TODO_CREATED: &str = "The todo was added.";
/// Notice shown after a todo is toggled
pub const TODO_UPDATED: &str = "The todo has been updated.";
/// Notice shown after a todo is deleted
pub const TODO_DELETED: &str = "The todo has been deleted.";
/// Notice shown after every todo of a list is completed
pub const ALL_COMPLETED: &str = "All todos have been completed.";

/// Commands accepted by [`ListsReducer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListsAction {
    /// Create an empty list
    CreateList {
        /// Submitted title, untrimmed
        title: String,
    },
    /// Change a list's title
    RenameList {
        /// Target list
        list_id: ListId,
        /// Submitted title, untrimmed
        title: String,
    },
    /// Remove a list and its todos
    DeleteList {
        /// Target list
        list_id: ListId,
    },
    /// Append a todo to a list
    CreateTodo {
        /// Owning list
        list_id: ListId,
        /// Submitted title, untrimmed
        title: String,
    },
    /// Set a todo's completion
    ToggleTodo {
        /// Owning list
        list_id: ListId,
        /// Target todo
        todo_id: TodoId,
        /// Requested completion
        completed: CompletionFlag,
    },
    /// Remove a todo
    DeleteTodo {
        /// Owning list
        list_id: ListId,
        /// Target todo
        todo_id: TodoId,
    },
    /// Complete every todo of a list
    CompleteAll {
        /// Target list
        list_id: ListId,
    },
}

/// Environment dependencies for [`ListsReducer`]
#[derive(Clone)]
pub struct ListsEnvironment {
    /// Allocates list and todo ids
    pub ids: Arc<dyn IdGenerator>,
}

impl ListsEnvironment {
    /// Creates an environment with the given id source
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }
}

impl Default for ListsEnvironment {
    fn default() -> Self {
        Self::new(Arc::new(RandomIds))
    }
}

impl std::fmt::Debug for ListsEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListsEnvironment").finish_non_exhaustive()
    }
}

type Effects = SmallVec<[Effect; 4]>;

/// Reducer for [`ListsState`]
#[derive(Clone, Copy, Debug, Default)]
pub struct ListsReducer;

impl ListsReducer {
    /// Creates a new `ListsReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn persisted(message: &str) -> Effects {
        smallvec![Effect::Persist, Effect::success(message)]
    }

    fn apply(state: &mut ListsState, action: ListsAction, env: &ListsEnvironment) -> Result<Effects, ListsError> {
        match action {
            ListsAction::CreateList { title } => {
                if let Some(err) = error_for_list_title(&title, &state.lists) {
                    return Err(err.into());
                }
                let id = ListId::from_uuid(env.ids.next_id());
                state.lists.push(TodoList::new(id, title.trim().to_string()));
                Ok(Self::persisted(LIST_CREATED))
            }

            ListsAction::RenameList { list_id, title } => {
                let list = find_list_by_id_mut(list_id, &mut state.lists)?;
                if let Some(err) = error_for_title_length(&title) {
                    return Err(err.into());
                }
                list.title = title.trim().to_string();
                Ok(Self::persisted(LIST_RENAMED))
            }

            ListsAction::DeleteList { list_id } => {
                find_list_by_id_mut(list_id, &mut state.lists)?;
                state.lists.retain(|list| list.id != list_id);
                Ok(Self::persisted(LIST_DELETED))
            }

            ListsAction::CreateTodo { list_id, title } => {
                let list = find_list_by_id_mut(list_id, &mut state.lists)?;
                if let Some(err) = error_for_title_length(&title) {
                    return Err(err.into());
                }
                let id = TodoId::from_uuid(env.ids.next_id());
                list.todos.push(Todo::new(id, title.trim().to_string()));
                Ok(Self::persisted(TODO_CREATED))
            }

            ListsAction::ToggleTodo {
                list_id,
                todo_id,
                completed,
            } => {
                let list = find_list_by_id_mut(list_id, &mut state.lists)?;
                let todo = find_todo_by_id_mut(todo_id, &mut list.todos)?;
                todo.completed = completed.is_complete();
                Ok(Self::persisted(TODO_UPDATED))
            }

            ListsAction::DeleteTodo { list_id, todo_id } => {
                let list = find_list_by_id_mut(list_id, &mut state.lists)?;
                find_todo_by_id_mut(todo_id, &mut list.todos)?;
                list.todos.retain(|todo| todo.id != todo_id);
                Ok(Self::persisted(TODO_DELETED))
            }

            ListsAction::CompleteAll { list_id } => {
                mark_all_complete(find_list_by_id_mut(list_id, &mut state.lists)?);
                Ok(Self::persisted(ALL_COMPLETED))
            }
        }
    }
}

impl Reducer for ListsReducer {
    type State = ListsState;
    type Action = ListsAction;
    type Environment = ListsEnvironment;

    fn reduce(&self, state: &mut ListsState, action: ListsAction, env: &ListsEnvironment) -> Effects {
        match Self::apply(state, action, env) {
            Ok(effects) => {
                state.last_error = None;
                effects
            }
            Err(err) => {
                tracing::debug!(error = %err, "Command rejected");
                state.last_error = Some(err);
                SmallVec::new()
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use listkeeper_testing::{assertions, ReducerTest, SequentialIds};
    use uuid::Uuid;

    fn env() -> ListsEnvironment {
        ListsEnvironment::new(Arc::new(SequentialIds::new()))
    }

    fn list_id(n: u128) -> ListId {
        ListId::from_uuid(Uuid::from_u128(n))
    }

    fn todo_id(n: u128) -> TodoId {
        TodoId::from_uuid(Uuid::from_u128(n))
    }

    /// One list "Groceries" (id 1) holding "Milk" (id 2) and "Eggs" (id 3).
    fn groceries() -> ListsState {
        let mut list = TodoList::new(list_id(1), "Groceries".into());
        list.todos.push(Todo::new(todo_id(2), "Milk".into()));
        list.todos.push(Todo::new(todo_id(3), "Eggs".into()));
        let mut state = ListsState::new();
        state.lists.push(list);
        state
    }

    #[test]
    fn create_list_appends_trimmed_title() {
        ReducerTest::new(ListsReducer::new())
            .with_env(env())
            .given_state(ListsState::new())
            .when_action(ListsAction::CreateList {
                title: "  Groceries ".into(),
            })
            .then_state(|state| {
                assert_eq!(state.lists.len(), 1);
                assert_eq!(state.lists[0].id, list_id(1));
                assert_eq!(state.lists[0].title, "Groceries");
                assert!(state.lists[0].todos.is_empty());
                assert!(state.last_error.is_none());
            })
            .then_effects(|effects| {
                assertions::assert_effects_count(effects, 2);
                assertions::assert_persisted(effects);
                assertions::assert_success_notice(effects, LIST_CREATED);
            })
            .run();
    }

    #[test]
    fn duplicate_list_is_rejected_without_effects() {
        ReducerTest::new(ListsReducer::new())
            .with_env(env())
            .given_state(groceries())
            .when_action(ListsAction::CreateList {
                title: "Groceries".into(),
            })
            .then_state(|state| {
                assert_eq!(state.lists.len(), 1);
                assert_eq!(
                    state.last_error,
                    Some(ListsError::Validation(ValidationError::DuplicateTitle))
                );
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn successful_command_clears_previous_error() {
        ReducerTest::new(ListsReducer::new())
            .with_env(env())
            .given_state(ListsState::new())
            .when_action(ListsAction::CreateList { title: String::new() })
            .when_action(ListsAction::CreateList {
                title: "Chores".into(),
            })
            .then_state(|state| {
                assert_eq!(state.lists.len(), 1);
                assert!(state.last_error.is_none());
            })
            .run();
    }

    #[test]
    fn rename_checks_length_only() {
        let mut state = groceries();
        state.lists.push(TodoList::new(list_id(9), "Chores".into()));

        ReducerTest::new(ListsReducer::new())
            .with_env(env())
            .given_state(state)
            .when_action(ListsAction::RenameList {
                list_id: list_id(1),
                title: "Chores".into(),
            })
            .then_state(|state| {
                assert_eq!(state.lists[0].title, "Chores");
            })
            .then_effects(|effects| assertions::assert_success_notice(effects, LIST_RENAMED))
            .run();
    }

    #[test]
    fn rename_rejects_blank_title() {
        ReducerTest::new(ListsReducer::new())
            .with_env(env())
            .given_state(groceries())
            .when_action(ListsAction::RenameList {
                list_id: list_id(1),
                title: "   ".into(),
            })
            .then_state(|state| {
                assert_eq!(state.lists[0].title, "Groceries");
                assert_eq!(
                    state.last_error,
                    Some(ListsError::Validation(ValidationError::TitleLength))
                );
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn delete_list_removes_it() {
        ReducerTest::new(ListsReducer::new())
            .with_env(env())
            .given_state(groceries())
            .when_action(ListsAction::DeleteList { list_id: list_id(1) })
            .then_state(|state| assert!(state.lists.is_empty()))
            .then_effects(|effects| assertions::assert_success_notice(effects, LIST_DELETED))
            .run();
    }

    #[test]
    fn unknown_list_is_not_found() {
        ReducerTest::new(ListsReducer::new())
            .with_env(env())
            .given_state(groceries())
            .when_action(ListsAction::CompleteAll { list_id: list_id(42) })
            .then_state(|state| {
                assert!(state.last_error.as_ref().is_some_and(ListsError::is_not_found));
                assert!(state.lists[0].todos.iter().all(|t| !t.completed));
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn create_todo_allocates_fresh_id() {
        ReducerTest::new(ListsReducer::new())
            .with_env(env())
            .given_state(groceries())
            .when_action(ListsAction::CreateTodo {
                list_id: list_id(1),
                title: " Bread ".into(),
            })
            .then_state(|state| {
                let todos = &state.lists[0].todos;
                assert_eq!(todos.len(), 3);
                assert_eq!(todos[2], Todo::new(todo_id(1), "Bread".into()));
            })
            .then_effects(|effects| assertions::assert_success_notice(effects, TODO_CREATED))
            .run();
    }

    #[test]
    fn overlong_todo_is_rejected() {
        ReducerTest::new(ListsReducer::new())
            .with_env(env())
            .given_state(groceries())
            .when_action(ListsAction::CreateTodo {
                list_id: list_id(1),
                title: "x".repeat(101),
            })
            .then_state(|state| {
                assert_eq!(state.lists[0].todos.len(), 2);
                assert!(state.last_error.is_some());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn toggle_sets_requested_completion() {
        ReducerTest::new(ListsReducer::new())
            .with_env(env())
            .given_state(groceries())
            .when_action(ListsAction::ToggleTodo {
                list_id: list_id(1),
                todo_id: todo_id(2),
                completed: CompletionFlag::Complete,
            })
            .then_state(|state| {
                assert!(state.lists[0].todos[0].completed);
                assert!(!state.lists[0].todos[1].completed);
            })
            .then_effects(|effects| assertions::assert_success_notice(effects, TODO_UPDATED))
            .run();
    }

    #[test]
    fn toggle_back_to_incomplete() {
        ReducerTest::new(ListsReducer::new())
            .with_env(env())
            .given_state(groceries())
            .when_action(ListsAction::ToggleTodo {
                list_id: list_id(1),
                todo_id: todo_id(2),
                completed: CompletionFlag::Complete,
            })
            .when_action(ListsAction::ToggleTodo {
                list_id: list_id(1),
                todo_id: todo_id(2),
                completed: CompletionFlag::Incomplete,
            })
            .then_state(|state| assert!(!state.lists[0].todos[0].completed))
            .run();
    }

    #[test]
    fn unknown_todo_is_not_found() {
        ReducerTest::new(ListsReducer::new())
            .with_env(env())
            .given_state(groceries())
            .when_action(ListsAction::DeleteTodo {
                list_id: list_id(1),
                todo_id: todo_id(77),
            })
            .then_state(|state| {
                assert_eq!(
                    state.last_error,
                    Some(ListsError::TodoNotFound(todo_id(77).to_string()))
                );
                assert_eq!(state.lists[0].todos.len(), 2);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn delete_todo_keeps_siblings() {
        ReducerTest::new(ListsReducer::new())
            .with_env(env())
            .given_state(groceries())
            .when_action(ListsAction::DeleteTodo {
                list_id: list_id(1),
                todo_id: todo_id(2),
            })
            .then_state(|state| {
                let titles: Vec<&str> = state.lists[0].todos.iter().map(|t| t.title.as_str()).collect();
                assert_eq!(titles, vec!["Eggs"]);
            })
            .then_effects(|effects| assertions::assert_success_notice(effects, TODO_DELETED))
            .run();
    }

    #[test]
    fn complete_all_marks_every_todo() {
        ReducerTest::new(ListsReducer::new())
            .with_env(env())
            .given_state(groceries())
            .when_action(ListsAction::CompleteAll { list_id: list_id(1) })
            .then_state(|state| {
                assert!(crate::queries::is_list_completed(&state.lists[0]));
            })
            .then_effects(|effects| {
                assertions::assert_persisted(effects);
                assertions::assert_success_notice(effects, ALL_COMPLETED);
            })
            .run();
    }
}
