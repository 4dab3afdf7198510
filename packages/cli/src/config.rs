//! Driver configuration file
//!
//! JSON with two optional keys, `default_algorithm` and `json`.

use crate::error::{CliError, Result};
use crate::logging::LoggingTransformer;
use hashcalc_hashing::HashAlgorithm;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Driver configuration, stored as JSON
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Algorithm used when `--algorithm` is absent; skips the flag prompt
    #[serde(default)]
    pub default_algorithm: Option<HashAlgorithm>,
    /// Emit JSON reports as if `--json` were given
    #[serde(default)]
    pub json: bool,
}

impl CliConfig {
    /// `$XDG_CONFIG_HOME/hashcalc/config.json` or the platform equivalent
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hashcalc").join("config.json"))
    }

    /// Load from an explicit path, or from the default location if present
    ///
    /// A missing file at the default location yields the defaults; a missing
    /// explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                LoggingTransformer::log_config(None);
                Ok(Self::default())
            }
        }
    }

    /// Read and parse one configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CliError::configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = serde_json::from_str(&raw)?;
        LoggingTransformer::log_config(Some(path));
        Ok(config)
    }
}
