//! Title validation.
//!
//! Titles are trimmed before they are checked, and the trimmed value is what
//! gets stored. Length counts characters, not bytes.

use crate::{error::ValidationError, types::TodoList};

/// Longest accepted title, in characters
pub const MAX_TITLE_CHARS: usize = 100;

/// Checks the 1–100 character rule shared by list and todo titles.
#[must_use]
pub fn error_for_title_length(title: &str) -> Option<ValidationError> {
    let len = title.trim().chars().count();
    if (1..=MAX_TITLE_CHARS).contains(&len) {
        None
    } else {
        Some(ValidationError::TitleLength)
    }
}

/// Checks a new list title: length rule plus exact-match uniqueness.
///
/// Uniqueness is case-sensitive, so "groceries" may sit next to "Groceries".
#[must_use]
pub fn error_for_list_title(title: &str, lists: &[TodoList]) -> Option<ValidationError> {
    if let Some(err) = error_for_title_length(title) {
        return Some(err);
    }

    let title = title.trim();
    if lists.iter().any(|list| list.title == title) {
        return Some(ValidationError::DuplicateTitle);
    }

    None
}
