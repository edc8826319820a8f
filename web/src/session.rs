//! Session-scoped state and the per-request store that drives reducers.
//!
//! State lives in the user's session under a fixed key. Each request gets a
//! [`ScopedStore`] holding a private copy of that state: it is read in full
//! when the handler starts and written back in full only when a reducer
//! returns [`Effect::Persist`].
//!
//! Requests from the same session are not serialized against each other. Two
//! concurrent mutations each start from the same snapshot and the later
//! write wins, so one of them can be lost.
//!
//! # Example
//!
//! ```ignore
//! async fn create(
//!     State(app): State<AppState>,
//!     mut store: ScopedStore<ListsState>,
//!     Form(form): Form<ListTitleForm>,
//! ) -> WebResult<Redirect> {
//!     store
//!         .send(&app.reducer, ListsAction::CreateList { title: form.list_title }, &app.env)
//!         .await?;
//!     Ok(Redirect::to("/lists"))
//! }
//! ```

use crate::{flash, AppError, WebResult};
use axum::{extract::FromRequestParts, http::request::Parts};
use listkeeper_core::{
    effect::{Effect, Notice},
    reducer::Reducer,
};
use serde::{de::DeserializeOwned, Serialize};
use tower_sessions::Session;

/// State that lives in a user's session.
pub trait SessionScoped: Serialize + DeserializeOwned + Default + Send + Sync {
    /// Session key the state is stored under.
    const KEY: &'static str;
}

/// Per-request store over session-scoped state.
///
/// Extracting a `ScopedStore` loads the state from the session, initializing
/// (and saving) an empty default on first access.
#[derive(Debug)]
pub struct ScopedStore<T> {
    session: Session,
    state: T,
}

impl<T: SessionScoped> ScopedStore<T> {
    /// Load the state from `session`, initializing it when absent.
    ///
    /// # Errors
    ///
    /// Returns an internal [`AppError`] if the session store fails.
    pub async fn load(session: Session) -> WebResult<Self> {
        let state = match session.get::<T>(T::KEY).await? {
            Some(state) => state,
            None => {
                let state = T::default();
                session.insert(T::KEY, &state).await?;
                tracing::debug!(key = T::KEY, "Initialized session state");
                state
            }
        };

        Ok(Self { session, state })
    }

    /// Read-only view of the current state.
    #[must_use]
    pub const fn state(&self) -> &T {
        &self.state
    }

    /// Mutable view of the current state.
    ///
    /// Changes made here are only written back by a later `Persist` effect.
    pub fn state_mut(&mut self) -> &mut T {
        &mut self.state
    }

    /// Reduce `action` against the state and execute the resulting effects.
    ///
    /// # Errors
    ///
    /// Returns an internal [`AppError`] if writing the session fails. The
    /// reducer's own rejections are not errors here; they are reported
    /// through the state.
    pub async fn send<R>(&mut self, reducer: &R, action: R::Action, env: &R::Environment) -> WebResult<()>
    where
        R: Reducer<State = T>,
    {
        let effects = reducer.reduce(&mut self.state, action, env);
        for effect in effects {
            self.execute(effect).await?;
        }
        Ok(())
    }

    /// Remove and return the notices queued for this page.
    ///
    /// # Errors
    ///
    /// Returns an internal [`AppError`] if the session store fails.
    pub async fn take_notices(&self) -> WebResult<Vec<Notice>> {
        flash::take(&self.session).await
    }

    async fn execute(&self, effect: Effect) -> WebResult<()> {
        match effect {
            Effect::Persist => {
                self.session.insert(T::KEY, &self.state).await?;
                metrics::counter!("listkeeper_session_writes_total").increment(1);
            }
            Effect::Flash(notice) => flash::push(&self.session, notice).await?,
        }
        Ok(())
    }
}

impl<S, T> FromRequestParts<S> for ScopedStore<T>
where
    S: Send + Sync,
    T: SessionScoped,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, message)| AppError::internal(message))?;

        Self::load(session).await
    }
}
