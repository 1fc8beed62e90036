//! Secure random number generation.
//!
//! Uses the operating system's cryptographic random source via `rand`.
//! Verification tokens carry [`TOKEN_ENTROPY_BYTES`] bytes (128 bits) of
//! entropy, so a collision within one learner's certificates is not a
//! practical concern.

use rand::{Rng, RngCore};

/// Entropy carried by each verification token.
pub const TOKEN_ENTROPY_BYTES: usize = 16;

const SUFFIX_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Fill a buffer with cryptographically secure random bytes.
pub fn fill_random(buf: &mut [u8]) {
    rand::thread_rng().fill_bytes(buf);
}

/// Generate a fixed-size array of cryptographically secure random bytes.
pub fn random_bytes<const N: usize>() -> [u8; N] {
    let mut buf = [0u8; N];
    fill_random(&mut buf);
    buf
}

/// Generate an opaque, base58-encoded token with 128 bits of entropy.
pub fn random_token() -> String {
    let bytes: [u8; TOKEN_ENTROPY_BYTES] = random_bytes();
    bs58::encode(bytes).into_string()
}

/// Generate a short upper-case alphanumeric suffix for display ids.
pub fn random_suffix(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect()
}
