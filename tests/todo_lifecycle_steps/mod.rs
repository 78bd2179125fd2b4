//! Step definitions for todo lifecycle scenarios.

pub mod world;
mod given;
mod when;
mod then;
