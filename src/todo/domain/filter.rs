//! Sparse filter specification for listing todos.

use super::{Priority, Todo};

/// Optional predicates narrowing a todo listing.
///
/// Each predicate participates only when set; an empty filter matches every
/// todo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoFilter {
    completed: Option<bool>,
    priority: Option<Priority>,
    search: Option<String>,
}

impl TodoFilter {
    /// Creates a filter with no predicates.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to the given completion state.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Restricts results to the given priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Restricts results to todos whose title or description contains the
    /// fragment, ignoring case.
    #[must_use]
    pub fn with_search(mut self, fragment: impl Into<String>) -> Self {
        self.search = Some(fragment.into());
        self
    }

    /// Returns the completion predicate.
    #[must_use]
    pub const fn completed(&self) -> Option<bool> {
        self.completed
    }

    /// Returns the priority predicate.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Returns the search fragment.
    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Evaluates the filter against a todo in memory.
    #[must_use]
    pub fn matches(&self, todo: &Todo) -> bool {
        let completed_matches = self.completed.is_none_or(|value| todo.completed() == value);
        let priority_matches = self.priority.is_none_or(|value| todo.priority() == value);
        let search_matches = self.search.as_deref().is_none_or(|fragment| {
            let needle = fragment.to_lowercase();
            let contains = |text: &str| text.to_lowercase().contains(&needle);
            contains(todo.title()) || todo.description().is_some_and(contains)
        });

        completed_matches && priority_matches && search_matches
    }
}
