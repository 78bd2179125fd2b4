//! `PostgreSQL` adapters for todo persistence.

mod models;
mod pool;
mod repository;
mod schema;
pub mod statement;

pub use pool::{PoolSettings, TodoPgPool, build_pool};
pub use repository::PostgresTodoRepository;
