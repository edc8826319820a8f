//! # Listkeeper Testing
//!
//! Testing utilities and helpers for Listkeeper reducers.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A Given-When-Then harness for reducers ([`ReducerTest`])
//! - Assertion helpers for returned effects
//! - proptest strategies for title inputs
//!
//! ## Example
//!
//! ```ignore
//! use listkeeper_testing::{assertions, ReducerTest, SequentialIds};
//!
//! ReducerTest::new(ListsReducer::new())
//!     .with_env(ListsEnvironment::new(Arc::new(SequentialIds::new())))
//!     .given_state(ListsState::new())
//!     .when_action(ListsAction::CreateList { title: "Groceries".into() })
//!     .then_state(|state| assert_eq!(state.lists.len(), 1))
//!     .then_effects(assertions::assert_persisted)
//!     .run();
//! ```

pub mod reducer_test;

pub use reducer_test::{assertions, ReducerTest};

/// Mock implementations for testing.
pub mod mocks {
    use listkeeper_core::environment::IdGenerator;
    use std::sync::atomic::{AtomicU64, Ordering};
    use uuid::Uuid;

    /// Deterministic id generator for tests
    ///
    /// Hands out `00000000-0000-0000-0000-000000000001`, `...02`, and so on,
    /// making ids predictable across runs.
    ///
    /// # Example
    ///
    /// ```
    /// use listkeeper_testing::mocks::SequentialIds;
    /// use listkeeper_core::environment::IdGenerator;
    /// use uuid::Uuid;
    ///
    /// let ids = SequentialIds::new();
    /// assert_eq!(ids.next_id(), Uuid::from_u128(1));
    /// assert_eq!(ids.next_id(), Uuid::from_u128(2));
    /// ```
    #[derive(Debug, Default)]
    pub struct SequentialIds {
        issued: AtomicU64,
    }

    impl SequentialIds {
        /// Create a generator whose first id is `1`
        #[must_use]
        pub const fn new() -> Self {
            Self {
                issued: AtomicU64::new(0),
            }
        }

        /// Number of ids handed out so far
        #[must_use]
        pub fn issued(&self) -> u64 {
            self.issued.load(Ordering::SeqCst)
        }
    }

    impl IdGenerator for SequentialIds {
        fn next_id(&self) -> Uuid {
            Uuid::from_u128(u128::from(self.issued.fetch_add(1, Ordering::SeqCst)) + 1)
        }
    }
}

/// Property-based testing utilities using proptest.
///
/// Strategies for the title inputs accepted (or rejected) by the validation
/// rules: 1 to 100 characters once surrounding whitespace is trimmed.
pub mod properties {
    use proptest::prelude::*;

    /// Longest accepted title, in characters
    pub const MAX_TITLE_CHARS: usize = 100;

    /// Titles that pass the length rule, without surrounding whitespace.
    pub fn valid_title() -> impl Strategy<Value = String> {
        "[A-Za-z0-9]([A-Za-z0-9 ]{0,98}[A-Za-z0-9])?"
    }

    /// Titles made only of whitespace (empty once trimmed).
    pub fn blank_title() -> impl Strategy<Value = String> {
        proptest::collection::vec(prop_oneof![Just(' '), Just('\t'), Just('\n')], 0..8)
            .prop_map(|chars| chars.into_iter().collect::<String>())
    }

    /// Titles longer than [`MAX_TITLE_CHARS`] once trimmed.
    pub fn overlong_title() -> impl Strategy<Value = String> {
        ((MAX_TITLE_CHARS + 1)..(MAX_TITLE_CHARS * 3))
            .prop_map(|len| "x".repeat(len))
    }

    /// Short lowercase-and-uppercase titles, useful for sorting properties.
    pub fn mixed_case_title() -> impl Strategy<Value = String> {
        "[A-Za-z]{1,6}"
    }
}

// Re-export commonly used items
pub use mocks::SequentialIds;
