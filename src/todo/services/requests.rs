//! Raw request payloads and their validation into domain inputs.
//!
//! These types mirror what arrives over the wire: strings that have not yet
//! been checked. Validation turns them into [`TodoFilter`], [`NewTodo`], and
//! [`TodoUpdate`] values or fails with a [`TodoDomainError`].

use crate::todo::domain::{
    Field, NewTodo, Priority, TodoDomainError, TodoFilter, TodoTitle, TodoUpdate, parse_due_date,
};
use serde::Deserialize;

/// Query parameters for listing todos.
///
/// A parameter participates when it was supplied, whatever its value.
/// Unrecognised parameters are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListTodosRequest {
    /// `"true"` selects completed todos; any other supplied value selects
    /// open ones.
    pub completed: Option<String>,
    /// Priority literal; empty means absent.
    pub priority: Option<String>,
    /// Substring matched against title and description; empty means absent.
    pub search: Option<String>,
}

impl ListTodosRequest {
    /// Builds the filter specification.
    ///
    /// Returns `None` when the request cannot match any todo, which happens
    /// when the priority is not a known literal.
    #[must_use]
    pub fn into_filter(self) -> Option<TodoFilter> {
        let mut filter = TodoFilter::new();

        if let Some(completed) = self.completed {
            filter = filter.with_completed(completed == "true");
        }
        if let Some(priority) = self.priority.filter(|value| !value.is_empty()) {
            filter = filter.with_priority(Priority::parse(&priority).ok()?);
        }
        if let Some(search) = self.search.filter(|value| !value.is_empty()) {
            filter = filter.with_search(search);
        }

        Some(filter)
    }
}

/// Payload for creating a todo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateTodoRequest {
    /// Required title.
    pub title: Option<String>,
    /// Optional free-form description; empty means none.
    pub description: Option<String>,
    /// Optional priority literal; defaults to `medium`.
    pub priority: Option<String>,
    /// Optional due date; empty means none.
    pub due_date: Option<String>,
}

impl CreateTodoRequest {
    /// Creates a request with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority literal.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the due date text.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Validates the payload.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::MissingTitle`] when no title was supplied,
    /// a title error when it is blank or too long, and
    /// [`TodoDomainError::InvalidPriority`] or
    /// [`TodoDomainError::InvalidDueDate`] for unreadable optional fields.
    pub fn validate(self) -> Result<NewTodo, TodoDomainError> {
        let raw_title = self.title.ok_or(TodoDomainError::MissingTitle)?;
        let title = TodoTitle::new(&raw_title).map_err(|err| match err {
            TodoDomainError::EmptyTitle => TodoDomainError::MissingTitle,
            other => other,
        })?;

        let mut new_todo = NewTodo::new(title);
        if let Some(description) = self.description.filter(|value| !value.is_empty()) {
            new_todo = new_todo.with_description(description);
        }
        if let Some(priority) = self.priority {
            new_todo = new_todo.with_priority(Priority::parse(&priority)?);
        }
        if let Some(due_date) = self.due_date.as_deref().map(parse_due_date).transpose()?.flatten() {
            new_todo = new_todo.with_due_date(due_date);
        }

        Ok(new_todo)
    }
}

/// Payload for partially updating a todo.
///
/// Keys missing from the JSON body stay [`Field::Absent`]. `description` and
/// `due_date` accept `null` to clear the stored value; an empty `due_date`
/// string clears it too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateTodoRequest {
    /// New title.
    #[serde(default)]
    pub title: Field<String>,
    /// New description, or `null` to clear it.
    #[serde(default)]
    pub description: Field<Option<String>>,
    /// New completion state.
    #[serde(default)]
    pub completed: Field<bool>,
    /// New priority literal.
    #[serde(default)]
    pub priority: Field<String>,
    /// New due date, or `null`/`""` to clear it.
    #[serde(default)]
    pub due_date: Field<Option<String>>,
}

impl UpdateTodoRequest {
    /// Validates the payload, keeping every absent field absent.
    ///
    /// # Errors
    ///
    /// Returns a title error for a present blank or over-long title,
    /// [`TodoDomainError::InvalidPriority`] for a present unknown priority, and
    /// [`TodoDomainError::InvalidDueDate`] for an unreadable due date.
    pub fn validate(self) -> Result<TodoUpdate, TodoDomainError> {
        Ok(TodoUpdate {
            title: self.title.try_map(TodoTitle::new)?,
            description: self.description,
            completed: self.completed,
            priority: self.priority.try_map(|value| Priority::parse(&value))?,
            due_date: self.due_date.try_map(|value| {
                value
                    .as_deref()
                    .map(parse_due_date)
                    .transpose()
                    .map(Option::flatten)
            })?,
        })
    }
}
