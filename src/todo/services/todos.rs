//! Todo request dispatcher.
//!
//! [`TodoService`] is the single entry point for the HTTP layer: it parses
//! raw identifiers and payloads, rejects invalid input before any storage
//! round trip, and reports every outcome through [`TodoServiceError`].

use super::requests::{CreateTodoRequest, ListTodosRequest, UpdateTodoRequest};
use crate::todo::{
    domain::{Todo, TodoDomainError, TodoId},
    ports::{TodoRepository, TodoRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::instrument;

/// Service-level errors for todo operations.
#[derive(Debug, Error)]
pub enum TodoServiceError {
    /// Caller input failed validation; storage was not contacted.
    #[error(transparent)]
    InvalidArgument(#[from] TodoDomainError),

    /// The targeted todo does not exist.
    #[error("todo {0} not found")]
    NotFound(TodoId),

    /// No storage connection became available in time.
    #[error("storage connection unavailable")]
    ResourceExhausted(#[source] TodoRepositoryError),

    /// Storage rejected or failed the operation.
    #[error("storage failure")]
    StorageFailure(#[source] TodoRepositoryError),
}

impl From<TodoRepositoryError> for TodoServiceError {
    fn from(err: TodoRepositoryError) -> Self {
        match err {
            TodoRepositoryError::PoolExhausted(_) => Self::ResourceExhausted(err),
            TodoRepositoryError::Persistence(_) => Self::StorageFailure(err),
        }
    }
}

/// Result type for todo service operations.
pub type TodoServiceResult<T> = Result<T, TodoServiceError>;

/// Todo request validation and dispatch service.
pub struct TodoService<R>
where
    R: TodoRepository,
{
    repository: Arc<R>,
}

impl<R> Clone for TodoService<R>
where
    R: TodoRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> TodoService<R>
where
    R: TodoRepository,
{
    /// Creates a service dispatching to `repository`.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists todos matching the supplied filters, newest first.
    ///
    /// A priority filter that names no known priority yields an empty list
    /// without contacting storage.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::ResourceExhausted`] or
    /// [`TodoServiceError::StorageFailure`] when storage fails.
    #[instrument(skip(self))]
    pub async fn list(&self, request: ListTodosRequest) -> TodoServiceResult<Vec<Todo>> {
        let Some(filter) = request.into_filter() else {
            tracing::debug!("priority filter matches no todo");
            return Ok(Vec::new());
        };
        Ok(self.repository.list(&filter).await?)
    }

    /// Retrieves a todo by its raw identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::InvalidArgument`] for a malformed id,
    /// [`TodoServiceError::NotFound`] when the todo does not exist, or a
    /// storage error.
    #[instrument(skip(self))]
    pub async fn get(&self, raw_id: &str) -> TodoServiceResult<Todo> {
        let id = TodoId::parse(raw_id)?;
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TodoServiceError::NotFound(id))
    }

    /// Creates a todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::InvalidArgument`] for a missing or blank
    /// title, an unknown priority, or an unreadable due date, or a storage
    /// error.
    #[instrument(skip(self))]
    pub async fn create(&self, request: CreateTodoRequest) -> TodoServiceResult<Todo> {
        let new_todo = request.validate()?;
        let todo = self.repository.create(&new_todo).await?;
        tracing::info!(todo_id = %todo.id(), "todo created");
        Ok(todo)
    }

    /// Applies a partial update.
    ///
    /// With no fields supplied this is a plain read and `updated_at` is left
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::InvalidArgument`] for a malformed id or
    /// invalid field, [`TodoServiceError::NotFound`] when the todo does not
    /// exist, or a storage error.
    #[instrument(skip(self))]
    pub async fn update(
        &self,
        raw_id: &str,
        request: UpdateTodoRequest,
    ) -> TodoServiceResult<Todo> {
        let id = TodoId::parse(raw_id)?;
        let update = request.validate()?;
        self.repository
            .update(id, &update)
            .await?
            .ok_or(TodoServiceError::NotFound(id))
    }

    /// Flips the completion flag of a todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::InvalidArgument`] for a malformed id,
    /// [`TodoServiceError::NotFound`] when the todo does not exist, or a
    /// storage error.
    #[instrument(skip(self))]
    pub async fn toggle(&self, raw_id: &str) -> TodoServiceResult<Todo> {
        let id = TodoId::parse(raw_id)?;
        self.repository
            .toggle(id)
            .await?
            .ok_or(TodoServiceError::NotFound(id))
    }

    /// Deletes a todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::InvalidArgument`] for a malformed id,
    /// [`TodoServiceError::NotFound`] when no row was removed, or a storage
    /// error.
    #[instrument(skip(self))]
    pub async fn delete(&self, raw_id: &str) -> TodoServiceResult<()> {
        let id = TodoId::parse(raw_id)?;
        if self.repository.delete(id).await? {
            tracing::info!(todo_id = %id, "todo deleted");
            Ok(())
        } else {
            Err(TodoServiceError::NotFound(id))
        }
    }

    /// Checks that storage is reachable.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the ping fails.
    pub async fn check_ready(&self) -> TodoServiceResult<()> {
        Ok(self.repository.ping().await?)
    }
}
