//! Fixed-size digest output

/// Length in bytes of every supported digest
pub const DIGEST_LEN: usize = 32;

/// Digest bytes from one SHA-256 or SHA3-256 computation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HashResult([u8; DIGEST_LEN]);

impl HashResult {
    /// Wrap raw digest bytes
    #[must_use]
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw digest bytes, in hash output order
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Unwrap into the raw digest bytes
    #[must_use]
    pub const fn into_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }

    /// Lowercase hex, most significant nibble first (64 characters)
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Display for HashResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}
