//! Application services validating todo requests and dispatching them to
//! storage.

mod requests;
mod todos;

pub use requests::{CreateTodoRequest, ListTodosRequest, UpdateTodoRequest};
pub use todos::{TodoService, TodoServiceError, TodoServiceResult};
