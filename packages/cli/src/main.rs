//! Main entry point for the hashcalc CLI

use clap::Parser;
use hashcalc_cli::{Cli, LoggingTransformer};
use std::process::ExitCode;

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    LoggingTransformer::init();

    Ok(hashcalc_cli::run(Cli::parse())?)
}
