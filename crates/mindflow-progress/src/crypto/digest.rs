//! SHA-256 content digests.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of `input`.
pub fn sha256_hex(input: &[u8]) -> String {
    hex::encode(Sha256::digest(input))
}

/// Digest a list of fields joined with `:`.
///
/// Fields are length-prefixed so that `["a:b", "c"]` and `["a", "b:c"]`
/// produce different digests.
pub fn digest_fields(fields: &[&str]) -> String {
    let mut input = String::new();
    for field in fields {
        input.push_str(&field.len().to_string());
        input.push(':');
        input.push_str(field);
        input.push(':');
    }
    sha256_hex(input.as_bytes())
}
