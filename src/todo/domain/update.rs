//! Sparse update specification for todos.

use super::{Field, Priority, TodoTitle};
use chrono::{DateTime, Utc};

/// Validated partial update of a todo.
///
/// Only present fields are applied. Nullable columns take
/// `Field<Option<_>>`, so a present `None` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoUpdate {
    /// New title.
    pub title: Field<TodoTitle>,
    /// New description; `Present(None)` clears it.
    pub description: Field<Option<String>>,
    /// New completion state.
    pub completed: Field<bool>,
    /// New priority.
    pub priority: Field<Priority>,
    /// New due date; `Present(None)` clears it.
    pub due_date: Field<Option<DateTime<Utc>>>,
}

impl TodoUpdate {
    /// Creates an update with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: TodoTitle) -> Self {
        self.title = Field::Present(title);
        self
    }

    /// Sets or clears the description.
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Field::Present(description);
        self
    }

    /// Sets the completion state.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Field::Present(completed);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Field::Present(priority);
        self
    }

    /// Sets or clears the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<DateTime<Utc>>) -> Self {
        self.due_date = Field::Present(due_date);
        self
    }

    /// Returns `true` when no field is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.title.is_present()
            || self.description.is_present()
            || self.completed.is_present()
            || self.priority.is_present()
            || self.due_date.is_present())
    }
}
