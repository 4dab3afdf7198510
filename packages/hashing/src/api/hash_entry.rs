//! Entry point for the fluent hashing API
//!
//! Usage: `Hash::sha256().compute(data)` or `Hash::with_flag(2)?.compute_text(text)`

use super::hash_functions::{sha256_hash, sha3_256_hash};
use crate::{HashAlgorithm, HashResult, Result};

/// Entry point for hash operations
pub struct Hash;

impl Hash {
    /// Use SHA-256
    #[must_use]
    pub fn sha256() -> HashBuilder {
        HashBuilder::new(HashAlgorithm::Sha256)
    }

    /// Use SHA3-256
    #[must_use]
    pub fn sha3_256() -> HashBuilder {
        HashBuilder::new(HashAlgorithm::Sha3_256)
    }

    /// Use an already selected algorithm
    #[must_use]
    pub fn with_algorithm(algorithm: HashAlgorithm) -> HashBuilder {
        HashBuilder::new(algorithm)
    }

    /// Select the algorithm from its integer flag
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidAlgorithm` unless `flag` is 1 or 2.
    pub fn with_flag(flag: i64) -> Result<HashBuilder> {
        HashAlgorithm::try_from(flag).map(HashBuilder::new)
    }
}

/// Hash builder bound to one algorithm
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashBuilder {
    algorithm: HashAlgorithm,
}

impl HashBuilder {
    /// Create a builder for `algorithm`
    #[must_use]
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self { algorithm }
    }

    /// The algorithm this builder computes
    #[must_use]
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Compute the digest of raw bytes
    #[must_use]
    pub fn compute<T: AsRef<[u8]>>(&self, data: T) -> HashResult {
        let data = data.as_ref();
        log::trace!("{} over {} bytes", self.algorithm, data.len());

        match self.algorithm {
            HashAlgorithm::Sha256 => sha256_hash(data),
            HashAlgorithm::Sha3_256 => sha3_256_hash(data),
        }
    }

    /// Compute the digest of the UTF-8 encoding of `text`
    #[must_use]
    pub fn compute_text(&self, text: &str) -> HashResult {
        self.compute(text.as_bytes())
    }
}
