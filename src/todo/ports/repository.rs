//! Repository port for todo persistence and lookup.

use crate::todo::domain::{NewTodo, Todo, TodoFilter, TodoId, TodoUpdate};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for todo repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// Todo persistence contract.
///
/// Every method performs a single round trip to storage. Timestamps are
/// stamped by the implementation, never by callers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Returns the todos matching `filter`, most recently created first.
    async fn list(&self, filter: &TodoFilter) -> TodoRepositoryResult<Vec<Todo>>;

    /// Finds a todo by identifier.
    ///
    /// Returns `None` when the todo does not exist.
    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>>;

    /// Stores a new todo and returns it with its assigned identifier and
    /// timestamps.
    async fn create(&self, new_todo: &NewTodo) -> TodoRepositoryResult<Todo>;

    /// Applies the present fields of `update` and refreshes `updated_at`.
    ///
    /// An update with no present fields is a plain lookup. Returns `None`
    /// when the todo does not exist.
    async fn update(&self, id: TodoId, update: &TodoUpdate) -> TodoRepositoryResult<Option<Todo>>;

    /// Flips the completion flag atomically and refreshes `updated_at`.
    ///
    /// Returns `None` when the todo does not exist.
    async fn toggle(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>>;

    /// Deletes a todo.
    ///
    /// Returns `false` when no row was removed.
    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<bool>;

    /// Verifies that storage is reachable.
    async fn ping(&self) -> TodoRepositoryResult<()>;
}

/// Errors returned by todo repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// No pooled connection became available before the checkout timeout.
    #[error("connection pool exhausted: {0}")]
    PoolExhausted(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a connection checkout failure.
    pub fn pool_exhausted(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::PoolExhausted(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
