//! Todo priority levels.

use super::{ParsePriorityError, TodoDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority of a todo record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait.
    Low,
    /// The default for new todos.
    #[default]
    Medium,
    /// Needs attention first.
    High,
}

impl Priority {
    /// Returns the canonical storage and wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parses a caller-supplied priority literal.
    ///
    /// Only the exact lowercase literals are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::InvalidPriority`] for any other value.
    pub fn parse(raw: &str) -> Result<Self, TodoDomainError> {
        match raw {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(TodoDomainError::InvalidPriority(raw.to_owned())),
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::parse(&normalized).map_err(|_| ParsePriorityError(value.to_owned()))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
