//! Binary entry point for the `lzo` command-line tool.
//!
//! 1. [`Cli::parse`] reads the arguments (clap exits with code 2 on bad usage).
//! 2. `env_logger` is set up from `RUST_LOG`, or from `-v` when unset.
//! 3. [`run`] executes the subcommand; any error is printed and mapped to
//!    exit code 1.

use clap::Parser;

use lzo::cli::args::Cli;
use lzo::cli::commands::run;
use lzo::cli::log_filter;

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_filter(cli.verbose)),
    )
    .format_timestamp(None)
    .init();

    if let Err(err) = run(cli.command) {
        eprintln!("lzo: {err:#}");
        std::process::exit(1);
    }
}
