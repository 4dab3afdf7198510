//! Driver error types

/// Errors surfaced by the driver
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Reading the console or writing the report failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Input ended before a required line was read
    #[error("Unexpected end of input while reading the {0}")]
    UnexpectedEof(&'static str),
    /// The configuration file could not be located or read
    #[error("Configuration error: {0}")]
    Configuration(String),
    /// JSON encoding or decoding failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}

/// Result type for driver operations
pub type Result<T> = std::result::Result<T, CliError>;
