//! I/O helpers for the generator.

pub mod config;
pub mod generate;
