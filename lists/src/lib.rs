//! # Listkeeper
//!
//! Session-scoped todo lists served as server-rendered HTML.
//!
//! Each visitor's lists live entirely in their session: there is no database
//! and no account. Commands flow through [`ListsReducer`], a pure reducer over
//! [`ListsState`]; the axum handlers in [`handlers`] load that state from the
//! session, guard the ids in the path, dispatch a [`ListsAction`], and either
//! redirect or re-render a form with a validation message.
//!
//! ```text
//! GET  /lists                 index, incomplete lists first
//! POST /lists                 create (title 1-100 chars, unique)
//! GET  /lists/{id}            detail, incomplete todos first
//! POST /lists/{id}/todos      add a todo
//! ...
//! ```
//!
//! See [`router::lists_router`] for the full route table.

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod lookup;
pub mod queries;
pub mod reducer;
pub mod router;
pub mod state;
pub mod types;
pub mod validation;
pub mod views;

pub use config::{ConfigError, ServerConfig};
pub use error::{ListsError, ValidationError};
pub use reducer::{ListsAction, ListsEnvironment, ListsReducer};
pub use router::{app, lists_router};
pub use state::AppState;
pub use types::{CompletionFlag, ListId, ListsState, Todo, TodoId, TodoList};
pub use views::load_templates;
