//! Command-line surface: `hugefile <path>`.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use tracing::debug;

use crate::core::args::{ArgCountError, single_path};
use crate::exit_codes;
use crate::io::config::GeneratorConfig;
use crate::io::generate::{GenerateOutcome, generate};

/// Every argument is a path, including ones that start with `-`; there are
/// no flags.
#[derive(Parser, Debug)]
#[command(
    name = "hugefile",
    about = "Write a large filler text file to PATH unless it already exists",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Output file path. Exactly one is required.
    #[arg(value_name = "PATH", allow_hyphen_values = true, num_args = 0..)]
    pub paths: Vec<PathBuf>,
}

impl Cli {
    /// Parse raw arguments (program name already stripped).
    ///
    /// A leading `--` is inserted so clap never reads an argument as an option.
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv = [OsString::from("hugefile"), OsString::from("--")]
            .into_iter()
            .chain(args.into_iter().map(Into::into));
        Self::parse_from(argv)
    }
}

/// Run the generator for the parsed arguments and return the exit code.
///
/// Errors are printed to stderr here; nothing is printed on success.
pub fn run_cli(cli: &Cli) -> i32 {
    let path = match single_path(&cli.paths) {
        Ok(path) => path,
        Err(err) => {
            if let ArgCountError::TooMany { got } = err {
                debug!(got, "extra positional arguments");
            }
            eprintln!("{}", err);
            return exit_codes::USAGE;
        }
    };

    match generate(path, &GeneratorConfig::default()) {
        Ok(GenerateOutcome::Created { lines, bytes }) => {
            debug!(lines, bytes, "generation finished");
            exit_codes::OK
        }
        Ok(GenerateOutcome::Skipped) => exit_codes::OK,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::FAILED
        }
    }
}
