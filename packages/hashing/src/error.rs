//! Error handling for digest selection

use thiserror::Error;

/// Hashing-specific errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// The algorithm selector is neither SHA-256 (1) nor SHA3-256 (2).
    #[error("Invalid algorithm flag. Supported values are 1 (SHA-256) and 2 (SHA3-256)")]
    InvalidAlgorithm {
        /// The rejected selector as the caller supplied it
        selector: String,
    },
}

impl HashError {
    /// Create an `InvalidAlgorithm` error for the rejected selector
    #[must_use]
    pub fn invalid_algorithm(selector: impl Into<String>) -> Self {
        Self::InvalidAlgorithm {
            selector: selector.into(),
        }
    }

    /// The selector that caused the failure
    #[must_use]
    pub fn selector(&self) -> &str {
        match self {
            Self::InvalidAlgorithm { selector } => selector,
        }
    }
}

/// Result type for hashing operations
pub type Result<T> = std::result::Result<T, HashError>;
