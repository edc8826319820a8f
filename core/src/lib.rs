//! # Listkeeper Core
//!
//! Core traits and types shared by every Listkeeper crate.
//!
//! Business logic is written as a [`Reducer`](reducer::Reducer): a pure
//! function `(State, Action, Environment) → Effects` that mutates state in
//! place and describes, but never performs, the follow-up work. The web shell
//! loads the state from the user's session, runs the reducer, and executes the
//! returned [`Effect`](effect::Effect) values.
//!
//! ## Core Concepts
//!
//! - **State**: session-scoped domain state (owned, serializable)
//! - **Action**: the commands a reducer accepts
//! - **Reducer**: validates a command and updates state
//! - **Effect**: a description of shell work (persist state, queue a notice)
//! - **Environment**: injected dependencies such as id generation
//!
//! ## Example
//!
//! ```
//! use listkeeper_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! #[derive(Default)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! enum CounterAction {
//!     Increment,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut CounterState,
//!         action: CounterAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect; 4]> {
//!         match action {
//!             CounterAction::Increment => {
//!                 state.count += 1;
//!                 smallvec![Effect::Persist]
//!             }
//!         }
//!     }
//! }
//!
//! let mut state = CounterState::default();
//! let effects = CounterReducer.reduce(&mut state, CounterAction::Increment, &());
//! assert_eq!(state.count, 1);
//! assert!(effects.iter().any(Effect::is_persist));
//! ```

pub use smallvec::{smallvec, SmallVec};

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action
        /// 2. Updates state in place
        /// 3. Returns effect descriptions for the shell to execute
        ///
        /// A rejected action leaves the domain data untouched and returns no
        /// effects; how the rejection is reported is up to the state type.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe work to be performed by the shell after a reducer runs.
/// They are plain values, so tests can inspect them without any I/O.
pub mod effect {
    use serde::{Deserialize, Serialize};
    use std::fmt;

    /// Severity of a user-facing notice.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum NoticeLevel {
        /// The command succeeded.
        Success,
        /// The command was rejected.
        Error,
    }

    impl fmt::Display for NoticeLevel {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Success => write!(f, "success"),
                Self::Error => write!(f, "error"),
            }
        }
    }

    /// A one-shot message shown on the next rendered page.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Notice {
        /// Severity, used by templates for styling
        pub level: NoticeLevel,
        /// Human-readable text
        pub message: String,
    }

    impl Notice {
        /// Creates a success notice
        #[must_use]
        pub fn success(message: impl Into<String>) -> Self {
            Self {
                level: NoticeLevel::Success,
                message: message.into(),
            }
        }

        /// Creates an error notice
        #[must_use]
        pub fn error(message: impl Into<String>) -> Self {
            Self {
                level: NoticeLevel::Error,
                message: message.into(),
            }
        }
    }

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed by the reducer. They are descriptions of what
    /// should happen, executed in order by the shell.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Effect {
        /// State was mutated in place and must be written back to the session.
        ///
        /// Session layers only notice top-level writes, so a reducer that
        /// changes nested data must ask for an explicit write.
        Persist,

        /// Queue a notice for the next rendered page.
        Flash(Notice),
    }

    impl Effect {
        /// Shorthand for `Effect::Flash(Notice::success(message))`
        #[must_use]
        pub fn success(message: impl Into<String>) -> Self {
            Self::Flash(Notice::success(message))
        }

        /// Returns true for [`Effect::Persist`]
        #[must_use]
        pub const fn is_persist(&self) -> bool {
            matches!(self, Self::Persist)
        }

        /// Returns the queued notice, if this is a flash effect
        #[must_use]
        pub const fn notice(&self) -> Option<&Notice> {
            match self {
                Self::Flash(notice) => Some(notice),
                Self::Persist => None,
            }
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All non-deterministic inputs are abstracted behind traits and injected via
/// the Environment parameter, so reducers stay reproducible under test.
pub mod environment {
    use uuid::Uuid;

    /// `IdGenerator` trait - abstracts identifier allocation for testability
    ///
    /// # Examples
    ///
    /// ```
    /// use listkeeper_core::environment::{IdGenerator, RandomIds};
    ///
    /// let ids = RandomIds;
    /// assert_ne!(ids.next_id(), ids.next_id());
    /// ```
    pub trait IdGenerator: Send + Sync {
        /// Allocate a fresh identifier
        fn next_id(&self) -> uuid::Uuid;
    }

    /// Production id generator backed by random UUID v4 values.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct RandomIds;

    impl IdGenerator for RandomIds {
        fn next_id(&self) -> Uuid {
            Uuid::new_v4()
        }
    }
}
