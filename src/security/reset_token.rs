//! Password-reset token generation and hashing.
//!
//! Only the SHA-256 digest of a reset token is ever stored; the plaintext is
//! returned once to the caller and proves control of the account's email.

use rand::RngCore;
use sha2::{Digest, Sha256};

/// Raw token length in bytes (hex-encoded to twice this many characters).
const TOKEN_BYTES: usize = 32;

/// How long a reset token stays valid.
pub const RESET_TOKEN_TTL_MINUTES: i64 = 30;

/// Generate a cryptographically random reset token.
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// One-way hash of a reset token, as stored on the account row.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}
