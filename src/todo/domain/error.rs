//! Error types for todo domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain todo values from caller input.
///
/// The `Display` text of each variant is safe to return to HTTP callers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The todo identifier is not a positive integer.
    #[error("invalid todo id '{0}', expected a positive integer")]
    InvalidId(String),

    /// No title was supplied on creation.
    #[error("title is required")]
    MissingTitle,

    /// The title is empty after trimming.
    #[error("title cannot be empty")]
    EmptyTitle,

    /// The title exceeds the persisted column width.
    #[error("title must be at most {max} characters, got {actual}")]
    TitleTooLong {
        /// Maximum permitted length in characters.
        max: usize,
        /// Length of the rejected title in characters.
        actual: usize,
    },

    /// The priority is not one of `low`, `medium`, or `high`.
    #[error("invalid priority value '{0}', expected low, medium, or high")]
    InvalidPriority(String),

    /// The due date could not be read as a timestamp.
    #[error("invalid due_date value '{0}'")]
    InvalidDueDate(String),
}

/// Error returned while parsing priorities from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown todo priority: {0}")]
pub struct ParsePriorityError(pub String);
