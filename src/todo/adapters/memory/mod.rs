//! In-memory adapters for todo tests and local runs.

mod todo;

pub use todo::InMemoryTodoRepository;
