//! In-memory repository for todo tests.

use async_trait::async_trait;
use mockable::Clock;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::todo::{
    domain::{NewTodo, Todo, TodoFilter, TodoId, TodoUpdate},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};

/// Thread-safe in-memory todo repository.
///
/// Identifiers increase monotonically and are never reused. Timestamps come
/// from the injected clock.
#[derive(Debug)]
pub struct InMemoryTodoRepository<C>
where
    C: Clock,
{
    state: Arc<RwLock<InMemoryTodoState>>,
    clock: Arc<C>,
}

#[derive(Debug, Default)]
struct InMemoryTodoState {
    todos: BTreeMap<TodoId, Todo>,
    last_id: i64,
}

impl<C> InMemoryTodoRepository<C>
where
    C: Clock,
{
    /// Creates an empty repository stamping times with `clock`.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            state: Arc::default(),
            clock,
        }
    }
}

impl<C> Clone for InMemoryTodoRepository<C>
where
    C: Clock,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

fn lock_error(err: impl ToString) -> TodoRepositoryError {
    TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl<C> TodoRepository for InMemoryTodoRepository<C>
where
    C: Clock + Send + Sync + 'static,
{
    async fn list(&self, filter: &TodoFilter) -> TodoRepositoryResult<Vec<Todo>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut todos: Vec<Todo> = state
            .todos
            .values()
            .filter(|todo| filter.matches(todo))
            .cloned()
            .collect();
        todos.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().cmp(&a.id()))
        });
        Ok(todos)
    }

    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.todos.get(&id).cloned())
    }

    async fn create(&self, new_todo: &NewTodo) -> TodoRepositoryResult<Todo> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.last_id += 1;
        let id = TodoId::from_persisted(state.last_id);
        let todo = Todo::from_new(id, new_todo.clone(), &*self.clock);
        state.todos.insert(id, todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: TodoId, update: &TodoUpdate) -> TodoRepositoryResult<Option<Todo>> {
        let mut state = self.state.write().map_err(lock_error)?;
        let Some(todo) = state.todos.get_mut(&id) else {
            return Ok(None);
        };
        todo.apply(update.clone(), &*self.clock);
        Ok(Some(todo.clone()))
    }

    async fn toggle(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        let mut state = self.state.write().map_err(lock_error)?;
        let Some(todo) = state.todos.get_mut(&id) else {
            return Ok(None);
        };
        todo.toggle(&*self.clock);
        Ok(Some(todo.clone()))
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<bool> {
        let mut state = self.state.write().map_err(lock_error)?;
        Ok(state.todos.remove(&id).is_some())
    }

    async fn ping(&self) -> TodoRepositoryResult<()> {
        self.state.read().map(|_| ()).map_err(lock_error)
    }
}
