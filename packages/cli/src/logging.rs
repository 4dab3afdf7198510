//! Structured logging for the driver
//!
//! `env_logger` backend behind the `log` facade. Records go to stderr so that
//! stdout only carries prompts and results.

use hashcalc_hashing::HashAlgorithm;
use log::{debug, info, warn};
use std::path::Path;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging setup and event helpers
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging (call once at startup)
    ///
    /// Levels come from `RUST_LOG`, e.g. `RUST_LOG=debug` or
    /// `RUST_LOG=hashcalc_cli=info,hashcalc_hashing=trace`.
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            debug!("logging initialized");
        });
    }

    /// Initialize logging for tests; safe to call repeatedly
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Digest produced. The input text itself is never logged.
    pub fn log_digest_computed(algorithm: HashAlgorithm, input_len: usize) {
        info!(
            "Digest computed: {algorithm} (flag: {}, input_len: {input_len})",
            algorithm.flag()
        );
    }

    /// Selector rejected at the driver boundary
    pub fn log_rejected_selector(selector: &str) {
        warn!("Algorithm selector rejected: {selector:?}");
    }

    /// Outcome of comparing against an expected digest
    pub fn log_verification(algorithm: HashAlgorithm, matched: bool) {
        if matched {
            info!("Verification succeeded: {algorithm}");
        } else {
            warn!("Verification failed: {algorithm}");
        }
    }

    /// Configuration source
    pub fn log_config(path: Option<&Path>) {
        match path {
            Some(path) => debug!("Configuration loaded from {}", path.display()),
            None => debug!("No configuration file, using defaults"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_helpers_do_not_panic() {
        LoggingTransformer::init_test();

        LoggingTransformer::log_digest_computed(HashAlgorithm::Sha256, 11);
        LoggingTransformer::log_rejected_selector("3");
        LoggingTransformer::log_verification(HashAlgorithm::Sha3_256, false);
        LoggingTransformer::log_config(None);
    }
}
