//! Todo tracking.
//!
//! Listing with optional filters, lookup, creation, partial update,
//! completion toggling, and deletion of todo records. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Request validation and dispatch in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
