//! Large filler file generator.
//!
//! Writes a fixed paragraph 1,000,001 times to a path, unless something
//! already exists there. The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure logic (argument counting, the filler text, output size).
//! - **[`io`]**: Side-effecting operations (config files, the target file).
//!
//! [`cli`] ties the two together for the `hugefile` binary.

pub mod cli;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
