//! Fluent hashing API
//!
//! Usage: `Hash::sha3_256().compute_text("Hello World").to_hex()`

pub mod hash_entry;
pub mod hash_functions;

pub use hash_entry::{Hash, HashBuilder};
pub use hash_functions::{sha256_hash, sha3_256_hash};
