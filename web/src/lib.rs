//! Axum shell for Listkeeper.
//!
//! This crate is the imperative half of the "Functional Core, Imperative
//! Shell" split. Reducers from `listkeeper-core` never touch HTTP, cookies or
//! templates; this crate does.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         Imperative Shell (Axum)         │  ← forms, redirects, HTML
//! │  - Session load / write-back            │  ← tower-sessions
//! │  - Flash queue, template rendering      │  ← tera
//! ├─────────────────────────────────────────┤
//! │         Functional Core                 │
//! │  - Reducers over session-scoped state   │  ← no I/O
//! │  - Effect descriptions (values)         │  ← Persist, Flash
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Request Flow
//!
//! 1. **HTTP Request** arrives at an Axum handler
//! 2. **Load state** from the session via the [`ScopedStore`] extractor
//! 3. **Guard** the target resource (missing → [`AppError`] 404)
//! 4. **Send** a command through the reducer
//! 5. **Execute effects**: write the session back, queue notices
//! 6. **Respond** with a redirect or a page rendered by [`Templates`]

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod flash;
pub mod middleware;
pub mod render;
pub mod session;

// Re-export key types for convenience
pub use error::AppError;
pub use middleware::{correlation_id, CORRELATION_ID_HEADER};
pub use render::Templates;
pub use session::{ScopedStore, SessionScoped};

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
