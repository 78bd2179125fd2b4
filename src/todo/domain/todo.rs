//! Todo aggregate root and creation input.

use super::{Priority, TodoId, TodoTitle, TodoUpdate};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Todo aggregate root.
///
/// Serializes to the JSON shape returned by the HTTP API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    id: TodoId,
    title: String,
    description: Option<String>,
    completed: bool,
    priority: Priority,
    due_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTodoData {
    /// Persisted identifier.
    pub id: TodoId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Creates a todo from validated input, stamping both timestamps with
    /// the same instant.
    #[must_use]
    pub fn from_new(id: TodoId, new_todo: NewTodo, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id,
            title: new_todo.title.into_inner(),
            description: new_todo.description,
            completed: false,
            priority: new_todo.priority,
            due_date: new_todo.due_date,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a todo from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTodoData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            completed: data.completed,
            priority: data.priority,
            due_date: data.due_date,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns whether the todo is completed.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies the present fields of `update` and refreshes `updated_at`.
    ///
    /// An update with no present fields leaves the todo untouched, including
    /// its modification timestamp.
    pub fn apply(&mut self, update: TodoUpdate, clock: &impl Clock) {
        if update.is_empty() {
            return;
        }

        let TodoUpdate {
            title,
            description,
            completed,
            priority,
            due_date,
        } = update;

        if let Some(value) = title.into_present() {
            self.title = value.into_inner();
        }
        if let Some(value) = description.into_present() {
            self.description = value;
        }
        if let Some(value) = completed.into_present() {
            self.completed = value;
        }
        if let Some(value) = priority.into_present() {
            self.priority = value;
        }
        if let Some(value) = due_date.into_present() {
            self.due_date = value;
        }
        self.touch(clock);
    }

    /// Flips the completion flag and refreshes `updated_at`.
    pub fn toggle(&mut self, clock: &impl Clock) {
        self.completed = !self.completed;
        self.touch(clock);
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc().max(self.created_at);
    }
}

/// Validated input for creating a todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    title: TodoTitle,
    description: Option<String>,
    priority: Priority,
    due_date: Option<DateTime<Utc>>,
}

impl NewTodo {
    /// Creates input with the required title and default priority.
    #[must_use]
    pub fn new(title: TodoTitle) -> Self {
        Self {
            title,
            description: None,
            priority: Priority::default(),
            due_date: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TodoTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }
}
