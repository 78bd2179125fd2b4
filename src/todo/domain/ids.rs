//! Identifier and validated scalar types for the todo domain.

use super::TodoDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage-assigned identifier of a todo record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    /// Parses a caller-supplied identifier, such as a URL path segment.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::InvalidId`] when the value is not a
    /// positive integer that fits the `BIGSERIAL` column.
    pub fn parse(raw: &str) -> Result<Self, TodoDomainError> {
        let trimmed = raw.trim();
        let is_digits = !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit());
        if !is_digits {
            return Err(TodoDomainError::InvalidId(raw.to_owned()));
        }

        trimmed
            .parse::<i64>()
            .ok()
            .filter(|value| *value > 0)
            .map(Self)
            .ok_or_else(|| TodoDomainError::InvalidId(raw.to_owned()))
    }

    /// Wraps an identifier read back from storage.
    #[must_use]
    pub const fn from_persisted(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Todo title, trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoTitle(String);

impl TodoTitle {
    /// Width of the `title` column.
    pub const MAX_LENGTH: usize = 255;

    /// Creates a validated title, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyTitle`] when nothing remains after
    /// trimming, or [`TodoDomainError::TitleTooLong`] when the trimmed title
    /// does not fit the column.
    pub fn new(value: impl AsRef<str>) -> Result<Self, TodoDomainError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TodoDomainError::EmptyTitle);
        }

        let actual = trimmed.chars().count();
        if actual > Self::MAX_LENGTH {
            return Err(TodoDomainError::TitleTooLong {
                max: Self::MAX_LENGTH,
                actual,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the title, returning the owned string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for TodoTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TodoTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
