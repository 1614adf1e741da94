//! AutoAnalyst command-line entry point.
//!
//! Parses arguments, creates a Tokio runtime for the async report path,
//! and runs the selected command.

#![warn(clippy::all, rust_2018_idioms)]
#![expect(clippy::print_stdout)]

mod cli;

use clap::Parser as _;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    autoanalyst::logging::init()?;

    let cli = cli::Cli::parse();

    tokio::runtime::Runtime::new()?.block_on(cli::run_command(cli.command))?;
    Ok(())
}
