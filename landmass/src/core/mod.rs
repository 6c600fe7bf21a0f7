//! Deterministic, pure logic over countries and landmasses.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! values and return deterministic outputs suitable for tests.

pub mod filter;
pub mod invariants;
pub mod land;
pub mod ranking;
pub mod types;
