//! Deterministic, pure logic shared by the generator.
//!
//! Core modules must be free of I/O side effects. They operate on plain values
//! and return deterministic outputs suitable for tests.

pub mod args;
pub mod filler;
