//! Positional argument count validation.

use std::fmt;
use std::path::{Path, PathBuf};

/// Number of positional arguments the CLI accepts.
pub const EXPECTED_ARGS: usize = 1;

/// Wrong number of positional arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgCountError {
    TooFew,
    TooMany { got: usize },
}

impl fmt::Display for ArgCountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFew => write!(f, "Too few arguments! \nExpected: {EXPECTED_ARGS}"),
            Self::TooMany { .. } => write!(f, "Too many arguments! \nExpected: {EXPECTED_ARGS}"),
        }
    }
}

impl std::error::Error for ArgCountError {}

pub fn check_arg_count(count: usize) -> Result<(), ArgCountError> {
    match count {
        0 => Err(ArgCountError::TooFew),
        EXPECTED_ARGS => Ok(()),
        got => Err(ArgCountError::TooMany { got }),
    }
}

/// Return the only path in `paths`, or the count error.
pub fn single_path(paths: &[PathBuf]) -> Result<&Path, ArgCountError> {
    check_arg_count(paths.len())?;
    Ok(paths[0].as_path())
}
