//! Shared types and pure logic for the standards guide.
//!
//! Everything here is target independent: the frontend crate consumes these
//! modules from wasm, and the unit tests run natively.

pub mod domain;
pub mod enums;
pub mod projections;
pub mod shared;
