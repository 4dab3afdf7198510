//! Algorithm selector
//!
//! The two supported algorithms are addressed by integer flags at the driver
//! boundary: `1` selects SHA-256 and `2` selects SHA3-256. Every other flag is
//! rejected with [`HashError::InvalidAlgorithm`].

use crate::{HashError, Result};
use digest::Digest;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hash algorithm selected for a digest computation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    /// SHA-256 (FIPS 180-4), flag `1`
    #[serde(rename = "sha256")]
    Sha256,
    /// SHA3-256 (FIPS 202), flag `2`
    #[serde(rename = "sha3-256")]
    Sha3_256,
}

impl HashAlgorithm {
    /// Every supported algorithm, in flag order
    pub const ALL: [HashAlgorithm; 2] = [HashAlgorithm::Sha256, HashAlgorithm::Sha3_256];

    /// Integer flag understood by the driver
    #[must_use]
    pub const fn flag(self) -> i64 {
        match self {
            Self::Sha256 => 1,
            Self::Sha3_256 => 2,
        }
    }

    /// Human readable algorithm name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha256 => "SHA-256",
            Self::Sha3_256 => "SHA3-256",
        }
    }

    /// Digest length in bytes
    #[must_use]
    pub fn digest_len(self) -> usize {
        match self {
            Self::Sha256 => <sha2::Sha256 as Digest>::output_size(),
            Self::Sha3_256 => <sha3::Sha3_256 as Digest>::output_size(),
        }
    }
}

impl TryFrom<i64> for HashAlgorithm {
    type Error = HashError;

    fn try_from(flag: i64) -> Result<Self> {
        match flag {
            1 => Ok(Self::Sha256),
            2 => Ok(Self::Sha3_256),
            other => Err(HashError::invalid_algorithm(other.to_string())),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = HashError;

    /// Accepts a decimal flag or an algorithm name such as `sha3-256`
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(flag) = trimmed.parse::<i64>() {
            return Self::try_from(flag);
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(Self::Sha256),
            "sha3-256" | "sha3_256" => Ok(Self::Sha3_256),
            _ => Err(HashError::invalid_algorithm(s)),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_round_trip() {
        for algorithm in HashAlgorithm::ALL {
            assert_eq!(HashAlgorithm::try_from(algorithm.flag()), Ok(algorithm));
        }
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("SHA-256".parse(), Ok(HashAlgorithm::Sha256));
        assert_eq!("sha256".parse(), Ok(HashAlgorithm::Sha256));
        assert_eq!("Sha3_256".parse(), Ok(HashAlgorithm::Sha3_256));
        assert_eq!(" 2\n".parse(), Ok(HashAlgorithm::Sha3_256));
    }

    #[test]
    fn rejects_unknown_selectors() {
        let err = "blake3".parse::<HashAlgorithm>().unwrap_err();
        assert_eq!(err.selector(), "blake3");

        let err = HashAlgorithm::try_from(0).unwrap_err();
        assert_eq!(err.selector(), "0");
    }

    #[test]
    fn both_digests_are_32_bytes() {
        assert_eq!(HashAlgorithm::Sha256.digest_len(), 32);
        assert_eq!(HashAlgorithm::Sha3_256.digest_len(), 32);
    }
}
