//! `hugefile <path>`: write a large filler text file unless `path` exists.

use hugefile::cli::{Cli, run_cli};
use hugefile::logging;

fn main() {
    logging::init();
    let cli = Cli::from_args(std::env::args_os().skip(1));
    std::process::exit(run_cli(&cli));
}
