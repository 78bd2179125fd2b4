//! Adapter implementations for todo persistence.

pub mod memory;
pub mod postgres;
