//! Interactive driver: prompt, compute, report
//!
//! Generic over its console handles so the whole flow can run against
//! in-memory buffers.

use crate::cli::Cli;
use crate::config::CliConfig;
use crate::error::{CliError, Result};
use crate::logging::LoggingTransformer;
use hashcalc_hashing::{compute_digest, verify_digest, HashAlgorithm, HashError};
use serde_json::json;
use std::io::{BufRead, Write};

/// Prompt for the text to hash
pub const TEXT_PROMPT: &str = "Enter a string to compute hash: ";

/// Prompt for the algorithm flag
pub const FLAG_PROMPT: &str = "Enter the algorithm flag (1 for SHA-256, 2 for SHA3-256): ";

/// One driver invocation. Missing fields are prompted for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Request {
    /// Text to hash
    pub text: Option<String>,
    /// Algorithm selector: a flag (`1`, `2`) or an algorithm name
    pub algorithm: Option<String>,
    /// Expected hex digest
    pub expect: Option<String>,
    /// Report as a JSON object
    pub json: bool,
}

impl Request {
    /// Merge command-line arguments over the configuration file
    ///
    /// `--algorithm` wins over `default_algorithm`; either one skips the flag
    /// prompt. JSON output is on when `--json` or the config asks for it.
    #[must_use]
    pub fn resolve(cli: Cli, config: &CliConfig) -> Self {
        Self {
            text: cli.text,
            algorithm: cli
                .algorithm
                .or_else(|| config.default_algorithm.map(|a| a.flag().to_string())),
            expect: cli.expect,
            json: cli.json || config.json,
        }
    }
}

/// What the driver reported
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Digest computed
    Digest {
        /// Algorithm used
        algorithm: HashAlgorithm,
        /// Lowercase hex digest
        digest: String,
        /// Verification result when an expected digest was supplied
        verified: Option<bool>,
    },
    /// Selector rejected; reported as `Error: <message>`
    Rejected(HashError),
}

impl Outcome {
    /// Process exit status. Only a failed verification is non-zero; a
    /// rejected selector still exits normally.
    #[must_use]
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Digest {
                verified: Some(false),
                ..
            } => 1,
            _ => 0,
        }
    }
}

/// Console driver
pub struct Driver<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Driver<R, W> {
    /// Create a driver over the given console handles
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Hand back the output handle
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run one request to completion
    ///
    /// `HashError`s are reported to the output and returned as
    /// [`Outcome::Rejected`]; only console failures come back as `Err`.
    pub fn run(&mut self, request: &Request) -> Result<Outcome> {
        let text = match &request.text {
            Some(text) => text.clone(),
            None => self.prompt(TEXT_PROMPT, "input text")?,
        };
        let selector = match &request.algorithm {
            Some(selector) => selector.clone(),
            None => self.prompt(FLAG_PROMPT, "algorithm flag")?,
        };

        let outcome = match selector.parse::<HashAlgorithm>() {
            Ok(algorithm) => {
                let digest = compute_digest(&text, algorithm);
                LoggingTransformer::log_digest_computed(algorithm, text.len());

                let verified = request.expect.as_deref().map(|expected| {
                    let matched = verify_digest(&text, algorithm, expected);
                    LoggingTransformer::log_verification(algorithm, matched);
                    matched
                });

                Outcome::Digest {
                    algorithm,
                    digest,
                    verified,
                }
            }
            Err(e) => {
                LoggingTransformer::log_rejected_selector(e.selector());
                Outcome::Rejected(e)
            }
        };

        if request.json {
            self.report_json(&outcome)?;
        } else {
            self.report_plain(&outcome)?;
        }
        self.output.flush()?;

        Ok(outcome)
    }

    fn prompt(&mut self, prompt: &str, what: &'static str) -> Result<String> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::UnexpectedEof(what));
        }

        // Strip the line terminator only
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    fn report_plain(&mut self, outcome: &Outcome) -> Result<()> {
        match outcome {
            Outcome::Digest {
                digest, verified, ..
            } => {
                writeln!(self.output, "Hash result: {digest}")?;
                match verified {
                    Some(true) => writeln!(self.output, "Verification: OK")?,
                    Some(false) => writeln!(self.output, "Verification: MISMATCH")?,
                    None => {}
                }
            }
            Outcome::Rejected(e) => writeln!(self.output, "Error: {e}")?,
        }
        Ok(())
    }

    fn report_json(&mut self, outcome: &Outcome) -> Result<()> {
        let value = match outcome {
            Outcome::Digest {
                algorithm,
                digest,
                verified,
            } => {
                let mut value = json!({
                    "success": true,
                    "algorithm": algorithm.name(),
                    "flag": algorithm.flag(),
                    "digest": digest,
                });
                if let Some(verified) = verified {
                    value["verified"] = json!(verified);
                }
                value
            }
            Outcome::Rejected(e) => json!({
                "success": false,
                "error": e.to_string(),
            }),
        };

        serde_json::to_writer(&mut self.output, &value)?;
        writeln!(self.output)?;
        Ok(())
    }
}
