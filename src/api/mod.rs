//! HTTP surface of the todo service.
//!
//! Routes are thin: each handler extracts raw input, calls one
//! [`TodoService`](crate::todo::services::TodoService) operation, and
//! renders the result. Errors are converted to statuses in one place,
//! [`error::status_for`].

pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;

pub use error::{ApiError, ErrorBody, status_for};
pub use routes::router;
