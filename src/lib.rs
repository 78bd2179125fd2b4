//! Todo service: a task-tracking HTTP API backed by `PostgreSQL`.
//!
//! Clients create, list, filter, update, toggle, and delete todo records.
//! Listing and partial updates are translated into parameterized SQL built
//! from exactly the filters or fields a caller supplied.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, memory)
//!
//! # Modules
//!
//! - [`todo`]: Todo domain, storage adapters, and request dispatch
//! - [`api`]: HTTP routes and error rendering
//! - [`config`]: Environment-driven configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod api;
pub mod config;
pub mod telemetry;
pub mod todo;
