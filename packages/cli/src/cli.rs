//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

/// Command line arguments
#[derive(Debug, Default, Parser)]
#[command(name = "hashcalc")]
#[command(about = "Compute the SHA-256 or SHA3-256 digest of a string", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Text to hash (prompted for when omitted)
    #[arg(short, long)]
    pub text: Option<String>,

    /// Algorithm flag: 1 for SHA-256, 2 for SHA3-256 (names such as sha3-256 also work)
    #[arg(short, long)]
    pub algorithm: Option<String>,

    /// Expected hex digest to verify the result against
    #[arg(short, long)]
    pub expect: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Path to the configuration file
    /// (default: $XDG_CONFIG_HOME/hashcalc/config.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
