//! Per-algorithm hash primitives backed by the RustCrypto crates

use crate::HashResult;

/// SHA-256 over the given bytes
#[must_use]
pub fn sha256_hash(data: &[u8]) -> HashResult {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    hasher.update(data);
    HashResult::from_bytes(hasher.finalize().into())
}

/// SHA3-256 over the given bytes
#[must_use]
pub fn sha3_256_hash(data: &[u8]) -> HashResult {
    use sha3::{Digest, Sha3_256};

    let mut hasher = Sha3_256::new();
    hasher.update(data);
    HashResult::from_bytes(hasher.finalize().into())
}
