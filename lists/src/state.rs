//! Shared application state handed to every handler.

use crate::reducer::{ListsEnvironment, ListsReducer};
use listkeeper_core::environment::IdGenerator;
use listkeeper_web::Templates;
use std::sync::Arc;

/// Process-wide dependencies.
///
/// Per-user data never lives here; it is loaded from the session on each
/// request.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Compiled page templates
    pub templates: Arc<Templates>,
    /// Reducer for list commands
    pub reducer: ListsReducer,
    /// Reducer dependencies
    pub env: ListsEnvironment,
}

impl AppState {
    /// Creates state that allocates random ids.
    #[must_use]
    pub fn new(templates: Templates) -> Self {
        Self {
            templates: Arc::new(templates),
            reducer: ListsReducer::new(),
            env: ListsEnvironment::default(),
        }
    }

    /// Replaces the id source, typically with a deterministic one in tests.
    #[must_use]
    pub fn with_ids(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.env = ListsEnvironment::new(ids);
        self
    }
}
