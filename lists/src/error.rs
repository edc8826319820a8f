//! Error types for list and todo commands.

use listkeeper_web::AppError;
use thiserror::Error;

/// A submitted title broke a validation rule.
///
/// Recovered locally: the form is shown again with this message and the
/// user's input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Trimmed title is empty or longer than 100 characters.
    #[error("The title must be between 1 and 100 characters.")]
    TitleLength,

    /// Another list already has exactly this title.
    #[error("The title must be unique.")]
    DuplicateTitle,
}

/// Why a list or todo command could not be carried out.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListsError {
    /// No list with this id exists in the session.
    #[error("list {0} not found")]
    ListNotFound(String),

    /// No todo with this id exists in the list.
    #[error("todo {0} not found")]
    TodoNotFound(String),

    /// The submitted input was invalid.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ListsError {
    /// True for the missing-resource variants.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ListNotFound(_) | Self::TodoNotFound(_))
    }
}

impl From<ListsError> for AppError {
    fn from(err: ListsError) -> Self {
        match err {
            ListsError::ListNotFound(id) => Self::not_found("List", id),
            ListsError::TodoNotFound(id) => Self::not_found("Todo", id),
            ListsError::Validation(reason) => Self::bad_request(reason.to_string()),
        }
    }
}
