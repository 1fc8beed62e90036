//! Randomness and digests for certificate identifiers.
//!
//! This module provides:
//! - Cryptographically secure random bytes, tokens and id suffixes
//! - SHA-256 content digests

pub mod digest;
pub mod random;
