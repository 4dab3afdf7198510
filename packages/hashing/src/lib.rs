//! SHA-256 / SHA3-256 digest selection and computation
//!
//! A single dispatch maps `(text, algorithm)` to the lowercase hexadecimal
//! digest of the text's UTF-8 encoding. Algorithms are selected by
//! [`HashAlgorithm`] or by their integer flag (`1` = SHA-256, `2` = SHA3-256).
//!
//! ```
//! use hashcalc_hashing::{compute_digest, compute_digest_with_flag, HashAlgorithm};
//!
//! assert_eq!(
//!     compute_digest("Hello World", HashAlgorithm::Sha256),
//!     "a591a6d40bf420404a011733cfb7b190d62c65bf0bcda32b57b277d9ad9f146e",
//! );
//! assert!(compute_digest_with_flag("Hello World", 3).is_err());
//! ```

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod api;
pub mod error;
pub mod hash_result;

pub use algorithm::HashAlgorithm;
pub use api::{Hash, HashBuilder};
pub use error::{HashError, Result};
pub use hash_result::{HashResult, DIGEST_LEN};

use subtle::ConstantTimeEq;

/// Lowercase hex digest of the UTF-8 encoding of `input`
#[must_use]
pub fn compute_digest(input: &str, algorithm: HashAlgorithm) -> String {
    Hash::with_algorithm(algorithm).compute_text(input).to_hex()
}

/// Lowercase hex digest of `input` with the algorithm chosen by integer flag
///
/// # Errors
///
/// Returns `HashError::InvalidAlgorithm` when `flag` is not 1 (SHA-256) or
/// 2 (SHA3-256). No digest is produced in that case.
pub fn compute_digest_with_flag(input: &str, flag: i64) -> Result<String> {
    let algorithm = HashAlgorithm::try_from(flag).inspect_err(|_| {
        log::debug!("rejected algorithm flag {flag}");
    })?;
    Ok(compute_digest(input, algorithm))
}

/// Check `input` against an expected hex digest
///
/// `expected_hex` is decoded case-insensitively. Malformed hex or a digest of
/// the wrong length never matches. Bytes are compared in constant time.
#[must_use]
pub fn verify_digest(input: &str, algorithm: HashAlgorithm, expected_hex: &str) -> bool {
    let Ok(expected) = hex::decode(expected_hex.trim()) else {
        return false;
    };
    let actual = Hash::with_algorithm(algorithm).compute_text(input);

    expected.len() == DIGEST_LEN && bool::from(actual.as_bytes()[..].ct_eq(&expected[..]))
}
