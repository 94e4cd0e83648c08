//! Stable exit codes for the `hugefile` binary.

/// File created, or target already existed.
pub const OK: i32 = 0;
/// Filesystem error during the existence check or the write.
pub const FAILED: i32 = 1;
/// Wrong number of positional arguments.
pub const USAGE: i32 = 2;
