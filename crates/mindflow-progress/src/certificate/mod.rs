//! Certificates: issued, verifiable records of module completion.
//!
//! The certificate module provides:
//! - Standard and master certificate issuance into a learner's progress
//! - Token lookup for the public verification surface
//! - Master eligibility checks
//! - Digest-based integrity verification

pub mod registry;
pub mod types;
pub mod verify;

pub use types::{Certificate, CertificateId, CertificateVerification, VerificationToken};

pub use registry::{find_for_module, has_master, issue, lookup, master_eligible};
pub use verify::verify;
