//! Interactive driver for the hashcalc digest utility
//!
//! Reads a line of text and an algorithm flag, then prints
//! `Hash result: <hex>` or `Error: <message>`.

#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod logging;

pub use cli::Cli;
pub use config::CliConfig;
pub use driver::{Driver, Outcome, Request};
pub use error::{CliError, Result};
pub use logging::LoggingTransformer;

use std::process::ExitCode;

/// Resolve configuration, then run the driver on the process console
///
/// Command-line flags win over the configuration file, which wins over the
/// interactive prompt.
pub fn run(cli: Cli) -> Result<ExitCode> {
    let config = CliConfig::load(cli.config.as_deref())?;
    let request = Request::resolve(cli, &config);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut driver = Driver::new(stdin.lock(), stdout.lock());
    let outcome = driver.run(&request)?;

    Ok(ExitCode::from(outcome.exit_status()))
}
