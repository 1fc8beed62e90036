//! Certificate integrity checks.

use crate::crypto::digest::digest_fields;

use super::types::{Certificate, CertificateVerification};

/// Compute the content digest of a certificate (ignores `digest` itself).
pub fn compute_digest(certificate: &Certificate) -> String {
    digest_fields(&[
        certificate.id.0.as_str(),
        certificate.module_code.as_str(),
        certificate.module_title.as_str(),
        certificate.issue_date.as_str(),
        certificate.verification_token.as_str(),
        certificate.student_name.as_str(),
    ])
}

/// Recompute a certificate's digest and compare it with the stored one.
///
/// Detects hand-edited persisted state. Certificates without a digest are
/// reported as invalid but are still resolvable by token.
pub fn verify(certificate: &Certificate) -> CertificateVerification {
    let now = crate::time::now_micros();
    let mut errors = Vec::new();

    let digest_present = !certificate.digest.is_empty();
    let digest_valid = digest_present && compute_digest(certificate) == certificate.digest;

    if !digest_present {
        errors.push("Certificate has no digest".to_string());
    } else if !digest_valid {
        errors.push("Certificate digest mismatch".to_string());
    }

    CertificateVerification {
        certificate_id: certificate.id.clone(),
        digest_present,
        digest_valid,
        is_valid: digest_valid,
        verified_at: now,
        errors,
    }
}
