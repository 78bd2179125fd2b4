//! Domain model for todo tracking.
//!
//! The todo domain holds the aggregate, validated scalar values, and the
//! sparse filter and update specifications consumed by the repository
//! port. Infrastructure concerns stay outside of this boundary.

mod due_date;
mod error;
mod field;
mod filter;
mod ids;
mod priority;
mod todo;
mod update;

pub use due_date::parse_due_date;
pub use error::{ParsePriorityError, TodoDomainError};
pub use field::Field;
pub use filter::TodoFilter;
pub use ids::{TodoId, TodoTitle};
pub use priority::Priority;
pub use todo::{NewTodo, PersistedTodoData, Todo};
pub use update::TodoUpdate;
