//! Domain types for session-scoped todo lists.
//!
//! A user's session holds a [`ListsState`]: an ordered collection of
//! [`TodoList`]s, each owning an ordered collection of [`Todo`]s.

use crate::error::ListsError;
use listkeeper_web::SessionScoped;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates an id from a UUID
            #[must_use]
            pub const fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            /// Returns the inner UUID
            #[must_use]
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a todo list
    ListId
);

define_id!(
    /// Unique identifier for a todo, scoped to its owning list
    TodoId
);

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier
    pub id: TodoId,
    /// What needs doing
    pub title: String,
    /// Whether the todo is done
    pub completed: bool,
}

impl Todo {
    /// Creates a new, incomplete todo
    #[must_use]
    pub const fn new(id: TodoId, title: String) -> Self {
        Self {
            id,
            title,
            completed: false,
        }
    }
}

/// A named, ordered collection of todos
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    /// Unique identifier
    pub id: ListId,
    /// Title, unique among the session's lists
    pub title: String,
    /// Todos in insertion order
    pub todos: Vec<Todo>,
}

impl TodoList {
    /// Creates a new list with no todos
    #[must_use]
    pub const fn new(id: ListId, title: String) -> Self {
        Self {
            id,
            title,
            todos: Vec::new(),
        }
    }
}

/// Everything a session knows about its todo lists.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ListsState {
    /// Lists in creation order
    pub lists: Vec<TodoList>,
    /// Why the last command was rejected (never stored in the session)
    #[serde(skip)]
    pub last_error: Option<ListsError>,
}

impl ListsState {
    /// Creates an empty state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lists: Vec::new(),
            last_error: None,
        }
    }

    /// Takes the rejection recorded by the last command, if any
    pub fn take_error(&mut self) -> Option<ListsError> {
        self.last_error.take()
    }
}

impl SessionScoped for ListsState {
    const KEY: &'static str = "lists";
}

/// Submitted completion flag of a toggle request.
///
/// The form posts the literal `"True"` to complete a todo. Every other value,
/// including `"true"` and `"False"`, marks it incomplete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionFlag {
    /// Mark the todo complete
    Complete,
    /// Mark the todo incomplete
    Incomplete,
}

impl CompletionFlag {
    /// Wire value for [`CompletionFlag::Complete`]
    pub const COMPLETE: &'static str = "True";
    /// Wire value for [`CompletionFlag::Incomplete`]
    pub const INCOMPLETE: &'static str = "False";

    /// Decodes a submitted form value
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        if value == Self::COMPLETE {
            Self::Complete
        } else {
            Self::Incomplete
        }
    }

    /// Flag a toggle button should submit for a todo in the given state
    #[must_use]
    pub const fn toggled(completed: bool) -> Self {
        if completed {
            Self::Incomplete
        } else {
            Self::Complete
        }
    }

    /// Encodes the flag for a form
    #[must_use]
    pub const fn as_wire(self) -> &'static str {
        match self {
            Self::Complete => Self::COMPLETE,
            Self::Incomplete => Self::INCOMPLETE,
        }
    }

    /// Whether the flag means complete
    #[must_use]
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }
}
