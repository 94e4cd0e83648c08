//! The filler paragraph and the size of a complete output file.

/// Paragraph written on every line of a generated file (without the newline).
pub const FILLER_LINE: &str = "Lorem ipsum dolor sit amet, consectetur adipisicing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.";

/// Lines in a generated file: one million plus one.
pub const LINE_COUNT: u64 = 1_000_001;

/// Byte length of a file holding `count` copies of `line`, each newline-terminated.
pub fn expected_bytes(line: &str, count: u64) -> u64 {
    count * (line.len() as u64 + 1)
}
